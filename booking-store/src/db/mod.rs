//! Storage layer

pub mod repository;

pub use repository::BookingRepository;

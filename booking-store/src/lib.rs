//! Booking Store - reference table-booking HTTP service
//!
//! In-memory store behind the `/api/bookings` endpoints that the booking
//! client talks to.
//!
//! # Modules
//!
//! - [`core`] - configuration, state, server lifecycle
//! - [`api`] - HTTP routes and handlers
//! - [`db`] - booking repository
//! - [`utils`] - logging

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState, serve, spawn_local};
pub use db::BookingRepository;
pub use utils::init_logger;

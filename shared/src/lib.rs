//! Shared types for the table booking workspace
//!
//! Wire types exchanged between the booking client and the booking store,
//! the slot catalog, and the error-code system used on error responses.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{Booking, BookingCreate, BookingUpdate, GuestCount, TimeSlot};

//! Data models
//!
//! Shared between booking-store and booking-client (via API).

pub mod booking;
pub mod guest_count;
pub mod time_slot;

// Re-exports
pub use booking::*;
pub use guest_count::*;
pub use time_slot::*;

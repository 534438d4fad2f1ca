//! Shared server state

use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::db::BookingRepository;

/// State handed to every handler
///
/// Cloning is cheap: all fields are shared references.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub bookings: BookingRepository,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, BookingRepository::new())
    }

    /// Build state around an existing repository (tests seed bookings this way)
    pub fn with_repository(config: Config, bookings: BookingRepository) -> Self {
        Self {
            config: Arc::new(config),
            bookings,
            started_at: Instant::now(),
        }
    }
}

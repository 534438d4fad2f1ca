//! Booking repository (in-memory)

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use shared::util::snowflake_id;
use shared::{Booking, BookingCreate, BookingUpdate};

/// Shared booking table keyed by id
#[derive(Debug, Clone, Default)]
pub struct BookingRepository {
    bookings: Arc<RwLock<HashMap<String, Booking>>>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bookings, ordered by date then time
    pub fn find_all(&self) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self.bookings.read().values().cloned().collect();
        bookings.sort_by(|a, b| (a.date, a.time, &a.id).cmp(&(b.date, b.time, &b.id)));
        bookings
    }

    pub fn find_by_id(&self, id: &str) -> Option<Booking> {
        self.bookings.read().get(id).cloned()
    }

    pub fn create(&self, payload: BookingCreate) -> Booking {
        let mut bookings = self.bookings.write();
        let mut id = snowflake_id().to_string();
        while bookings.contains_key(&id) {
            id = snowflake_id().to_string();
        }
        let booking = Booking::from_create(id.clone(), payload, Utc::now());
        bookings.insert(id, booking.clone());
        booking
    }

    /// Apply a partial update; `None` when the booking does not exist
    pub fn update(&self, id: &str, payload: BookingUpdate) -> Option<Booking> {
        let mut bookings = self.bookings.write();
        let booking = bookings.get_mut(id)?;
        booking.apply_update(payload);
        Some(booking.clone())
    }

    /// Remove a booking; `false` when it did not exist
    pub fn delete(&self, id: &str) -> bool {
        self.bookings.write().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

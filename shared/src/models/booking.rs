//! Booking Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GuestCount, TimeSlot};

/// Create booking payload (POST /api/bookings)
///
/// `date` is the instant of local midnight on the booked day, as sent by
/// the guest's client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub time: TimeSlot,
    pub guests: GuestCount,
}

/// Stored booking, as returned by the booking store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub time: TimeSlot,
    pub guests: GuestCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Build the stored form of a create payload
    pub fn from_create(id: impl Into<String>, payload: BookingCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id.into()),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            date: payload.date,
            time: payload.time,
            guests: payload.guests,
            created_at: Some(created_at),
        }
    }

    /// Apply a partial update in place
    pub fn apply_update(&mut self, update: BookingUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(guests) = update.guests {
            self.guests = guests;
        }
    }
}

/// Update booking payload (PUT /api/bookings/{id})
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<TimeSlot>,
    pub guests: Option<GuestCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_accepts_store_echo() {
        let json = r#"{
            "_id": "665f1c2e9b1e8a0012345678",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "date": "2026-10-18T00:00:00.000Z",
            "time": "19:00",
            "guests": 2,
            "createdAt": "2026-10-17T09:12:44.120Z",
            "__v": 0
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id.as_deref(), Some("665f1c2e9b1e8a0012345678"));
        assert_eq!(booking.time.label(), "19:00");
        assert_eq!(booking.guests.get(), 2);
        assert!(booking.created_at.is_some());
    }

    #[test]
    fn test_booking_accepts_plain_id_and_missing_metadata() {
        let json = r#"{
            "id": "42",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "date": "2026-10-18T00:00:00Z",
            "time": "12:00",
            "guests": 1
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id.as_deref(), Some("42"));
        assert!(booking.created_at.is_none());
    }

    #[test]
    fn test_booking_rejects_missing_fields() {
        let json = r#"{ "name": "Ada", "time": "12:00", "guests": 1 }"#;
        assert!(serde_json::from_str::<Booking>(json).is_err());
    }

    #[test]
    fn test_apply_update_only_touches_given_fields() {
        let create = BookingCreate {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            date: "2026-10-18T00:00:00Z".parse().unwrap(),
            time: TimeSlot::from_label("19:00").unwrap(),
            guests: GuestCount::new(2).unwrap(),
        };
        let mut booking = Booking::from_create("1", create, Utc::now());

        booking.apply_update(BookingUpdate {
            guests: Some(GuestCount::new(4).unwrap()),
            ..Default::default()
        });

        assert_eq!(booking.guests.get(), 4);
        assert_eq!(booking.name, "Ada");
        assert_eq!(booking.time.label(), "19:00");
    }
}

//! Confirmation view model
//!
//! Read-only projection of a confirmed booking into the labeled rows of the
//! confirmation dialog.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use shared::{Booking, GuestCount, TimeSlot};

use crate::clock::local_date;

pub const CONFIRMATION_TITLE: &str = "Booking Confirmed!";

/// Immutable snapshot of an acknowledged booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmedBooking {
    /// Store-assigned id, when the store returned one
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub time: TimeSlot,
    pub guests: GuestCount,
}

impl ConfirmedBooking {
    /// Calendar day of the booking on the local clock
    pub fn local_date(&self) -> NaiveDate {
        local_date(self.date)
    }
}

impl From<Booking> for ConfirmedBooking {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            name: booking.name,
            email: booking.email,
            phone: booking.phone,
            date: booking.date,
            time: booking.time,
            guests: booking.guests,
        }
    }
}

/// One labeled row of the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// `"1 person"` / `"N people"`
pub fn format_guests(guests: GuestCount) -> String {
    match guests.get() {
        1 => "1 person".to_string(),
        n => format!("{} people", n),
    }
}

/// Long date with ordinal day, e.g. `October 18th, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

/// The ordered detail rows for a confirmed booking
pub fn detail_fields(booking: &ConfirmedBooking) -> Vec<DetailField> {
    vec![
        DetailField {
            label: "Name",
            value: booking.name.clone(),
        },
        DetailField {
            label: "Email",
            value: booking.email.clone(),
        },
        DetailField {
            label: "Phone",
            value: booking.phone.clone(),
        },
        DetailField {
            label: "Date",
            value: format_long_date(booking.local_date()),
        },
        DetailField {
            label: "Time",
            value: booking.time.label(),
        },
        DetailField {
            label: "Guests",
            value: format_guests(booking.guests),
        },
    ]
}

/// Dialog state: open flag plus the booking on display
#[derive(Debug, Clone, Default)]
pub struct ConfirmationView {
    open: bool,
    booking: Option<ConfirmedBooking>,
}

impl ConfirmationView {
    /// Display `booking`, replacing any earlier one
    pub fn show(&mut self, booking: ConfirmedBooking) {
        self.booking = Some(booking);
        self.open = true;
    }

    /// Close the dialog and drop the displayed booking
    pub fn close(&mut self) {
        self.open = false;
        self.booking = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn booking(&self) -> Option<&ConfirmedBooking> {
        self.booking.as_ref()
    }

    pub fn title(&self) -> &'static str {
        CONFIRMATION_TITLE
    }

    /// Rows to render; empty when nothing is displayed
    pub fn fields(&self) -> Vec<DetailField> {
        self.booking.as_ref().map(detail_fields).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::local_midnight;

    fn booking(guests: u32) -> ConfirmedBooking {
        ConfirmedBooking {
            id: Some("1".into()),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            date: local_midnight(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()),
            time: TimeSlot::from_label("19:00").unwrap(),
            guests: GuestCount::new(guests).unwrap(),
        }
    }

    #[test]
    fn test_guest_pluralization() {
        assert_eq!(format_guests(GuestCount::new(1).unwrap()), "1 person");
        assert_eq!(format_guests(GuestCount::new(2).unwrap()), "2 people");
        assert_eq!(format_guests(GuestCount::new(10).unwrap()), "10 people");
    }

    #[test]
    fn test_long_date_ordinals() {
        let fmt = |d| format_long_date(NaiveDate::from_ymd_opt(2026, 10, d).unwrap());
        assert_eq!(fmt(1), "October 1st, 2026");
        assert_eq!(fmt(2), "October 2nd, 2026");
        assert_eq!(fmt(3), "October 3rd, 2026");
        assert_eq!(fmt(11), "October 11th, 2026");
        assert_eq!(fmt(12), "October 12th, 2026");
        assert_eq!(fmt(13), "October 13th, 2026");
        assert_eq!(fmt(18), "October 18th, 2026");
        assert_eq!(fmt(21), "October 21st, 2026");
        assert_eq!(fmt(22), "October 22nd, 2026");
        assert_eq!(fmt(31), "October 31st, 2026");
    }

    #[test]
    fn test_fields_in_order() {
        let fields = detail_fields(&booking(2));
        let rows: Vec<(&str, &str)> = fields.iter().map(|f| (f.label, f.value.as_str())).collect();
        assert_eq!(
            rows,
            vec![
                ("Name", "Ada"),
                ("Email", "ada@example.com"),
                ("Phone", "555-0100"),
                ("Date", "October 18th, 2026"),
                ("Time", "19:00"),
                ("Guests", "2 people"),
            ]
        );
    }

    #[test]
    fn test_view_open_and_close() {
        let mut view = ConfirmationView::default();
        assert!(!view.is_open());
        assert!(view.fields().is_empty());

        view.show(booking(1));
        assert!(view.is_open());
        assert_eq!(view.title(), "Booking Confirmed!");
        assert_eq!(view.fields()[5].value, "1 person");

        view.close();
        assert!(!view.is_open());
        assert!(view.booking().is_none());
        assert!(view.fields().is_empty());
    }

    #[test]
    fn test_show_replaces_previous_booking() {
        let mut view = ConfirmationView::default();
        view.show(booking(1));
        view.show(booking(6));
        assert_eq!(view.booking().unwrap().guests.get(), 6);
    }
}

//! Booking draft
//!
//! The guest's in-progress reservation. Only the party size is checked as
//! it is typed; whether a date and time were chosen is checked on submit.

use chrono::NaiveDate;
use serde::Serialize;
use shared::{BookingCreate, GuestCount, TimeSlot};

use crate::clock::local_midnight;

/// Unsubmitted reservation fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub selected_date: Option<NaiveDate>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: GuestCount,
    pub selected_time: Option<TimeSlot>,
}

/// A single edit to the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    /// Pick a calendar date, or clear it with `None`
    Date(Option<NaiveDate>),
    Time(TimeSlot),
    Name(String),
    Email(String),
    Phone(String),
    /// Raw party size as entered; range-checked on input
    Guests(u32),
}

impl DraftField {
    /// Field name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Name(_) => "name",
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
            Self::Guests(_) => "guests",
        }
    }
}

/// Read-only recap shown once both date and time are chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSummary {
    pub date: String,
    pub time: String,
    pub guests: String,
}

impl BookingDraft {
    /// Fresh draft: today's date, no time, empty contact fields, one guest
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: Some(today),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            guests: GuestCount::default(),
            selected_time: None,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Both a date and a time have been chosen
    pub fn has_selection(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some()
    }

    /// Wire payload for this draft, if the selection is complete
    ///
    /// The date travels as the instant of local midnight; every other field
    /// is sent as entered.
    pub fn to_request(&self) -> Option<BookingCreate> {
        let date = self.selected_date?;
        let time = self.selected_time?;

        Some(BookingCreate {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            date: local_midnight(date),
            time,
            guests: self.guests,
        })
    }

    pub fn summary(&self) -> Option<DraftSummary> {
        let date = self.selected_date?;
        let time = self.selected_time?;

        Some(DraftSummary {
            date: date.format("%-m/%-d/%Y").to_string(),
            time: time.label(),
            guests: format!("{} guests", self.guests),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::local_date;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_new_draft_initial_values() {
        let draft = BookingDraft::new(today());
        assert_eq!(draft.selected_date, Some(today()));
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.phone.is_empty());
        assert_eq!(draft.guests.get(), 1);
        assert!(draft.selected_time.is_none());
        assert!(!draft.has_selection());
    }

    #[test]
    fn test_to_request_requires_date_and_time() {
        let mut draft = BookingDraft::new(today());
        assert!(draft.to_request().is_none());

        draft.selected_time = TimeSlot::from_label("19:00");
        draft.selected_date = None;
        assert!(draft.to_request().is_none());

        draft.selected_date = Some(today());
        let request = draft.to_request().unwrap();
        assert_eq!(request.time.label(), "19:00");
        assert_eq!(local_date(request.date), today());
    }

    #[test]
    fn test_to_request_sends_fields_verbatim() {
        let mut draft = BookingDraft::new(today());
        draft.name = "  Ada ".into();
        draft.email = "not-an-email".into();
        draft.phone = String::new();
        draft.guests = GuestCount::new(3).unwrap();
        draft.selected_time = TimeSlot::from_label("12:30");

        let request = draft.to_request().unwrap();
        assert_eq!(request.name, "  Ada ");
        assert_eq!(request.email, "not-an-email");
        assert_eq!(request.phone, "");
        assert_eq!(request.guests.get(), 3);
    }

    #[test]
    fn test_summary() {
        let mut draft = BookingDraft::new(today());
        assert!(draft.summary().is_none());

        draft.selected_time = TimeSlot::from_label("20:30");
        draft.guests = GuestCount::new(4).unwrap();
        let summary = draft.summary().unwrap();
        assert_eq!(summary.date, "10/17/2026");
        assert_eq!(summary.time, "20:30");
        assert_eq!(summary.guests, "4 guests");
    }

    #[test]
    fn test_reset() {
        let mut draft = BookingDraft::new(today());
        draft.name = "Ada".into();
        draft.selected_time = TimeSlot::from_label("12:00");
        let tomorrow = today().succ_opt().unwrap();

        draft.reset(tomorrow);
        assert_eq!(draft, BookingDraft::new(tomorrow));
    }
}

//! Slot eligibility
//!
//! A slot is eligible on a date when the date's calendar day combined with
//! the slot's time of day is not earlier than now. Nothing here is cached:
//! callers re-evaluate against the clock on every read.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use shared::TimeSlot;

/// One catalog slot and whether it can be picked right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub slot: TimeSlot,
    pub eligible: bool,
}

/// Absolute local time of `slot` on `date`
pub fn slot_instant(date: NaiveDate, slot: TimeSlot) -> NaiveDateTime {
    date.and_time(slot.time())
}

/// Whether `slot` can be selected for `date` at `now`
///
/// Without a date there is nothing to compare against, so no slot is eligible.
pub fn is_eligible(slot: TimeSlot, date: Option<NaiveDate>, now: NaiveDateTime) -> bool {
    date.is_some_and(|d| slot_instant(d, slot) >= now)
}

/// Eligibility of every catalog slot, in catalog order
pub fn availability(date: Option<NaiveDate>, now: NaiveDateTime) -> Vec<SlotAvailability> {
    TimeSlot::catalog()
        .iter()
        .map(|&slot| SlotAvailability {
            slot,
            eligible: is_eligible(slot, date, now),
        })
        .collect()
}

/// Calendar dates before today cannot be chosen
pub fn is_date_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::from_label(label).unwrap()
    }

    #[test]
    fn test_no_date_means_nothing_eligible() {
        let now = date(2026, 10, 17).and_hms_opt(9, 0, 0).unwrap();
        assert!(availability(None, now).iter().all(|a| !a.eligible));
    }

    #[test]
    fn test_today_only_future_slots_eligible() {
        let today = date(2026, 10, 17);
        let now = today.and_hms_opt(13, 10, 0).unwrap();

        for a in availability(Some(today), now) {
            assert_eq!(a.eligible, a.slot.time() >= now.time(), "slot {}", a.slot);
        }
        assert!(!is_eligible(slot("13:00"), Some(today), now));
        assert!(is_eligible(slot("13:30"), Some(today), now));
    }

    #[test]
    fn test_slot_starting_exactly_now_is_eligible() {
        let today = date(2026, 10, 17);
        let now = today.and_hms_opt(18, 30, 0).unwrap();
        assert!(is_eligible(slot("18:30"), Some(today), now));
        assert!(!is_eligible(slot("18:30"), Some(today), now + Duration::seconds(1)));
    }

    #[test]
    fn test_future_date_all_eligible() {
        let now = date(2026, 10, 17).and_hms_opt(23, 59, 0).unwrap();
        let tomorrow = date(2026, 10, 18);
        let slots = availability(Some(tomorrow), now);
        assert_eq!(slots.len(), TimeSlot::catalog().len());
        assert!(slots.iter().all(|a| a.eligible));
    }

    #[test]
    fn test_past_date_nothing_eligible() {
        let now = date(2026, 10, 17).and_hms_opt(8, 0, 0).unwrap();
        let yesterday = date(2026, 10, 16);
        assert!(availability(Some(yesterday), now).iter().all(|a| !a.eligible));
        assert!(!is_date_selectable(yesterday, now.date()));
        assert!(is_date_selectable(now.date(), now.date()));
    }

    #[test]
    fn test_eligibility_follows_clock() {
        let today = date(2026, 10, 17);
        let mut now = today.and_hms_opt(11, 0, 0).unwrap();
        let count = |now| availability(Some(today), now).iter().filter(|a| a.eligible).count();

        assert_eq!(count(now), 12);
        now += Duration::hours(3);
        assert_eq!(count(now), 8);
        now += Duration::hours(7);
        assert_eq!(count(now), 0);
    }
}

//! Time slot catalog
//!
//! Bookable times of day are a fixed, ordered catalog covering the lunch
//! and dinner services. A [`TimeSlot`] can only be obtained from that
//! catalog, so any value in circulation is a valid slot.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// A bookable half-hour time of day (e.g. `19:30`)
///
/// Serialized as its `HH:MM` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    /// Minutes after midnight
    minutes: u16,
}

const fn slot(hour: u16, minute: u16) -> TimeSlot {
    TimeSlot {
        minutes: hour * 60 + minute,
    }
}

/// The slot catalog, in display order
pub const SLOT_CATALOG: [TimeSlot; 12] = [
    // Lunch
    slot(12, 0),
    slot(12, 30),
    slot(13, 0),
    slot(13, 30),
    slot(14, 0),
    slot(14, 30),
    // Dinner
    slot(18, 0),
    slot(18, 30),
    slot(19, 0),
    slot(19, 30),
    slot(20, 0),
    slot(20, 30),
];

/// Label does not name a catalog slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}: {0:?}", msg = UnknownTimeSlot::MESSAGE)]
pub struct UnknownTimeSlot(pub String);

impl UnknownTimeSlot {
    /// Fixed prefix of the error text, stable enough to match on
    pub const MESSAGE: &'static str = "unknown time slot";
}

impl TimeSlot {
    /// All bookable slots, in catalog order
    pub fn catalog() -> &'static [TimeSlot] {
        &SLOT_CATALOG
    }

    pub const fn hour(&self) -> u16 {
        self.minutes / 60
    }

    pub const fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Wall-clock time of day for this slot
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or_default()
    }

    /// `HH:MM` label, e.g. `"12:30"`
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// Look up a catalog slot by its label
    pub fn from_label(label: &str) -> Option<Self> {
        SLOT_CATALOG.iter().copied().find(|s| s.label() == label)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim()).ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

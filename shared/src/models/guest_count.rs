//! Party size

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of guests for a booking, always within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GuestCount(u32);

/// Party size outside the accepted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{msg}, got {0}", msg = GuestCountError::MESSAGE)]
pub struct GuestCountError(pub u32);

impl GuestCountError {
    /// Fixed prefix of the error text, stable enough to match on
    pub const MESSAGE: &'static str = "guest count must be between 1 and 10";
}

impl GuestCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;

    pub fn new(count: u32) -> Result<Self, GuestCountError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(GuestCountError(count))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for GuestCount {
    type Error = GuestCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuestCount> for u32 {
    fn from(count: GuestCount) -> Self {
        count.0
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

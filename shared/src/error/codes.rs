//! Error codes shared by the booking store and its clients
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Booking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 7xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 7001,
    /// Time is not part of the slot catalog
    TimeSlotUnknown = 7002,
    /// Party size outside the accepted range
    GuestCountOutOfRange = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Request did not complete within the server timeout
    RequestTimeout = 9002,
}

/// Error category, derived from the code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Booking,
    System,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::TimeSlotUnknown => "Time is not a bookable slot",
            ErrorCode::GuestCountOutOfRange => "Guest count must be between 1 and 10",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::RequestTimeout => "Request timed out",
        }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self.code() {
            7000..=7999 => ErrorCategory::Booking,
            9000..=9999 => ErrorCategory::System,
            _ => ErrorCategory::General,
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            7001 => Ok(ErrorCode::BookingNotFound),
            7002 => Ok(ErrorCode::TimeSlotUnknown),
            7003 => Ok(ErrorCode::GuestCountOutOfRange),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::RequestTimeout),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Guest-facing notices raised by the booking session

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style message for the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub fn missing_selection() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Missing Information",
            description: "Please select both date and time for your booking.",
        }
    }

    pub fn booking_confirmed() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Booking Successful!",
            description: "Your table has been reserved. Check your email for confirmation.",
        }
    }

    pub fn booking_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Booking Failed",
            description: "There was an error processing your booking. Please try again.",
        }
    }
}

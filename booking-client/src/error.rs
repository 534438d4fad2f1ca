//! Client error types

use chrono::NaiveDate;
use shared::TimeSlot;
use thiserror::Error;

use crate::session::SessionState;

/// Error talking to the booking store
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store answered with a structured error body
    #[error("API error {code}: {message}")]
    Api {
        status: u16,
        code: u16,
        message: String,
    },

    /// Store answered with a non-success status and no usable error body
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the booking contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// A draft edit was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Draft cannot change while a submission is pending
    #[error("draft is locked while in state {state:?}")]
    Locked { state: SessionState },

    #[error("date {0} is in the past")]
    DateInPast(NaiveDate),

    #[error("time slot {0} is not available for the selected date")]
    SlotUnavailable(TimeSlot),

    #[error(transparent)]
    GuestCount(#[from] shared::models::GuestCountError),
}

/// A submission attempt did not produce a booking
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Date or time not chosen; nothing was sent
    #[error("please select both date and time for your booking")]
    MissingSelection,

    /// Submission refused in the current state; nothing was sent
    #[error("cannot submit while in state {state:?}")]
    NotEditable { state: SessionState },

    /// A store answer arrived with no submission pending
    #[error("no submission pending (state {state:?})")]
    NoPendingSubmission { state: SessionState },

    /// The store exchange failed; the draft is kept for a retry
    #[error("booking failed: {0}")]
    SubmissionFailed(#[source] ClientError),
}

impl SubmitError {
    /// Whether the guest can simply submit again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SubmissionFailed(_))
    }
}

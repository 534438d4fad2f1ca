//! Booking session - draft and submission state machine
//!
//! ```text
//! Editing ──submit──▶ Submitting ──ok──▶ Confirmed ──edit / close──▶ Editing
//!    ▲                    │
//!    └──edit── Failed ◀───┘ err
//! ```
//!
//! A session owns exactly one draft. Submission is split into
//! [`begin_submission`](BookingSession::begin_submission) and
//! [`finish_submission`](BookingSession::finish_submission) so a caller that
//! shares the session can release it during the network exchange; while the
//! state is `Submitting` further submissions and edits are refused.

use serde::Serialize;
use shared::{Booking, BookingCreate, GuestCount, TimeSlot};

use crate::clock::{Clock, SystemClock};
use crate::confirmation::{ConfirmationView, ConfirmedBooking};
use crate::draft::{BookingDraft, DraftField, DraftSummary};
use crate::http::BookingStore;
use crate::notice::Notice;
use crate::slots::{self, SlotAvailability};
use crate::{ClientResult, DraftError, SubmitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Editing,
    Submitting,
    Confirmed,
    Failed,
}

/// One guest's booking session
#[derive(Debug)]
pub struct BookingSession<C: Clock = SystemClock> {
    clock: C,
    draft: BookingDraft,
    state: SessionState,
    confirmation: ConfirmationView,
    notices: Vec<Notice>,
}

impl BookingSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BookingSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BookingSession<C> {
    pub fn with_clock(clock: C) -> Self {
        let draft = BookingDraft::new(clock.today());
        Self {
            clock,
            draft,
            state: SessionState::Editing,
            confirmation: ConfirmationView::default(),
            notices: Vec::new(),
        }
    }

    // ========== Presentation boundary ==========

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn summary(&self) -> Option<DraftSummary> {
        self.draft.summary()
    }

    /// Catalog slots flagged for the draft's date, evaluated against the clock now
    pub fn availability(&self) -> Vec<SlotAvailability> {
        slots::availability(self.draft.selected_date, self.clock.now())
    }

    pub fn is_slot_eligible(&self, slot: TimeSlot) -> bool {
        slots::is_eligible(slot, self.draft.selected_date, self.clock.now())
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        matches!(self.state, SessionState::Editing | SessionState::Failed)
    }

    pub fn confirmation(&self) -> &ConfirmationView {
        &self.confirmation
    }

    /// Dismiss the confirmation dialog
    pub fn close_confirmation(&mut self) {
        self.confirmation.close();
        if self.state == SessionState::Confirmed {
            self.state = SessionState::Editing;
        }
    }

    /// Drain notices raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ========== Draft edits ==========

    /// Apply one edit to the draft
    ///
    /// Past dates, ineligible slots and out-of-range party sizes are refused
    /// without touching the draft. Changing the date drops a selected time
    /// that is no longer eligible on the new date.
    pub fn update_field(&mut self, field: DraftField) -> Result<(), DraftError> {
        if self.state == SessionState::Submitting {
            return Err(DraftError::Locked { state: self.state });
        }

        let now = self.clock.now();
        let field_name = field.name();

        match field {
            DraftField::Date(date) => {
                if let Some(d) = date
                    && !slots::is_date_selectable(d, now.date())
                {
                    return Err(DraftError::DateInPast(d));
                }
                self.touch();
                self.draft.selected_date = date;

                if let Some(time) = self.draft.selected_time
                    && !slots::is_eligible(time, date, now)
                {
                    tracing::debug!(time = %time, "Clearing time slot no longer eligible");
                    self.draft.selected_time = None;
                }
            }
            DraftField::Time(slot) => {
                if !slots::is_eligible(slot, self.draft.selected_date, now) {
                    return Err(DraftError::SlotUnavailable(slot));
                }
                self.touch();
                self.draft.selected_time = Some(slot);
            }
            DraftField::Guests(count) => {
                let guests = GuestCount::new(count)?;
                self.touch();
                self.draft.guests = guests;
            }
            DraftField::Name(name) => {
                self.touch();
                self.draft.name = name;
            }
            DraftField::Email(email) => {
                self.touch();
                self.draft.email = email;
            }
            DraftField::Phone(phone) => {
                self.touch();
                self.draft.phone = phone;
            }
        }

        tracing::debug!(field = field_name, "Draft updated");
        Ok(())
    }

    /// Any accepted edit returns a settled session to editing
    fn touch(&mut self) {
        if matches!(self.state, SessionState::Confirmed | SessionState::Failed) {
            self.state = SessionState::Editing;
        }
    }

    // ========== Submission ==========

    /// Check the draft and enter `Submitting`, returning the request to send
    ///
    /// The draft and state are left untouched on error.
    pub fn begin_submission(&mut self) -> Result<BookingCreate, SubmitError> {
        if !self.can_submit() {
            tracing::warn!(state = ?self.state, "Submission rejected");
            return Err(SubmitError::NotEditable { state: self.state });
        }

        let Some(request) = self.draft.to_request() else {
            tracing::debug!("Submission blocked: date or time not selected");
            self.notices.push(Notice::missing_selection());
            return Err(SubmitError::MissingSelection);
        };

        self.state = SessionState::Submitting;
        tracing::info!(
            date = %request.date,
            time = %request.time,
            guests = %request.guests,
            "Submitting booking"
        );
        Ok(request)
    }

    /// Apply the store's answer to a pending submission
    ///
    /// On success the confirmation is shown and the draft starts over; on
    /// failure the draft is left exactly as it was.
    pub fn finish_submission(
        &mut self,
        result: ClientResult<Booking>,
    ) -> Result<ConfirmedBooking, SubmitError> {
        if self.state != SessionState::Submitting {
            return Err(SubmitError::NoPendingSubmission { state: self.state });
        }

        match result {
            Ok(booking) => {
                let confirmed = ConfirmedBooking::from(booking);
                tracing::info!(id = ?confirmed.id, "Booking confirmed");

                self.confirmation.show(confirmed.clone());
                self.draft.reset(self.clock.today());
                self.state = SessionState::Confirmed;
                self.notices.push(Notice::booking_confirmed());
                Ok(confirmed)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking submission failed");
                self.state = SessionState::Failed;
                self.notices.push(Notice::booking_failed());
                Err(SubmitError::SubmissionFailed(e))
            }
        }
    }

    /// Submit the draft to `store`
    ///
    /// No automatic retry; after a failure the guest submits again.
    pub async fn submit<S: BookingStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<ConfirmedBooking, SubmitError> {
        let request = self.begin_submission()?;
        let result = store.create_booking(&request).await;
        self.finish_submission(result)
    }
}

//! Booking Client - table reservation workflow
//!
//! Holds a guest's draft reservation, decides which time slots can be
//! picked as the clock advances, submits the draft to the booking store and
//! exposes the confirmation to display.
//!
//! ```no_run
//! use booking_client::{BookingSession, ClientConfig, DraftField, TimeSlot};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ClientConfig::from_env().build_store()?;
//! let mut session = BookingSession::new();
//!
//! session.update_field(DraftField::Time(TimeSlot::from_label("20:00").unwrap()))?;
//! session.update_field(DraftField::Name("Ada".into()))?;
//!
//! let confirmed = session.submit(&store).await?;
//! println!("Booked for {}", confirmed.time);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod confirmation;
pub mod draft;
pub mod error;
pub mod http;
pub mod notice;
pub mod session;
pub mod slots;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ClientConfig;
pub use confirmation::{ConfirmationView, ConfirmedBooking, DetailField};
pub use draft::{BookingDraft, DraftField, DraftSummary};
pub use error::{ClientError, ClientResult, DraftError, SubmitError};
pub use http::{BookingStore, NetworkBookingStore};
pub use notice::{Notice, NoticeKind};
pub use session::{BookingSession, SessionState};
pub use slots::SlotAvailability;

// Re-export shared types for convenience
pub use shared::{Booking, BookingCreate, GuestCount, TimeSlot};

//! Booking store client
//!
//! The remote store is reached through a single call, create-booking.
//! [`BookingStore`] is the seam the session talks to; [`NetworkBookingStore`]
//! is the reqwest implementation.

use async_trait::async_trait;
use reqwest::Client;
use shared::{Booking, BookingCreate, ErrorBody};

use crate::{ClientConfig, ClientError, ClientResult};

/// Service of record for bookings
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a new booking and return the stored record
    async fn create_booking(&self, request: &BookingCreate) -> ClientResult<Booking>;
}

/// HTTP booking store
#[derive(Debug, Clone)]
pub struct NetworkBookingStore {
    client: Client,
    bookings_url: String,
}

impl NetworkBookingStore {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            bookings_url: config.bookings_url(),
        })
    }

    /// URL bookings are posted to
    pub fn bookings_url(&self) -> &str {
        &self.bookings_url
    }

    /// Decode the store's answer
    ///
    /// The body is read as text first so that a shape mismatch surfaces as
    /// [`ClientError::InvalidResponse`] rather than a transport error.
    async fn handle_response(&self, response: reqwest::Response) -> ClientResult<Booking> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Ok(api_err) = serde_json::from_str::<ErrorBody>(&text) {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    code: api_err.code,
                    message: api_err.message,
                });
            }
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl BookingStore for NetworkBookingStore {
    async fn create_booking(&self, request: &BookingCreate) -> ClientResult<Booking> {
        tracing::debug!(url = %self.bookings_url, "Posting booking");
        let response = self
            .client
            .post(&self.bookings_url)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl<S: BookingStore + ?Sized> BookingStore for std::sync::Arc<S> {
    async fn create_booking(&self, request: &BookingCreate) -> ClientResult<Booking> {
        (**self).create_booking(request).await
    }
}

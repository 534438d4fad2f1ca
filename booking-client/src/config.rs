//! Client configuration

/// Default booking store address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Path of the booking collection on the store
pub const BOOKINGS_PATH: &str = "api/bookings";

/// Client configuration for connecting to the booking store
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BOOKING_API_URL | http://localhost:3001 | Booking store base URL |
/// | BOOKING_API_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from the environment (and `.env`, if present)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            base_url: std::env::var("BOOKING_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout: std::env::var("BOOKING_API_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Full URL of the booking collection
    pub fn bookings_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), BOOKINGS_PATH)
    }

    /// Create a network booking store from this configuration
    pub fn build_store(&self) -> crate::ClientResult<crate::NetworkBookingStore> {
        crate::NetworkBookingStore::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

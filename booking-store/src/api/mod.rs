//! HTTP API
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Health check |
//! | /api/bookings | GET | List bookings |
//! | /api/bookings | POST | Create booking (201) |
//! | /api/bookings/{id} | GET | Fetch one booking |
//! | /api/bookings/{id} | PUT | Partial update |
//! | /api/bookings/{id} | DELETE | Remove booking |

pub mod bookings;
pub mod health;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router};
use shared::AppError;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// All routes, without middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(bookings::router())
}

/// Routes plus the middleware stack, bound to `state`
///
/// Browser clients on other origins call the store directly, hence the
/// permissive CORS layer.
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a middleware failure into a structured error response
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::request_timeout()
    } else {
        AppError::internal(err.to_string())
    }
}

//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{GuestCountError, UnknownTimeSlot};
use shared::{AppError, AppResult, Booking, BookingCreate, BookingUpdate, ErrorCode};

use crate::core::ServerState;

/// Map a body extraction failure onto a structured 400
///
/// The catalog and party-size checks run while deserializing, so their
/// messages surface here.
fn body_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    if text.contains(UnknownTimeSlot::MESSAGE) {
        AppError::with_message(ErrorCode::TimeSlotUnknown, text)
    } else if text.contains(GuestCountError::MESSAGE) {
        AppError::with_message(ErrorCode::GuestCountOutOfRange, text)
    } else {
        AppError::invalid_request(text)
    }
}

fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    Ok(())
}

fn validate_contact(name: &str, email: &str, phone: &str) -> AppResult<()> {
    require_non_empty("name", name)?;
    require_non_empty("email", email)?;
    require_non_empty("phone", phone)
}

/// GET /api/bookings - list bookings ordered by date and time
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Booking>>> {
    Ok(Json(state.bookings.find_all()))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .bookings
        .find_by_id(&id)
        .ok_or_else(|| AppError::booking_not_found(&id))?;
    Ok(Json(booking))
}

/// POST /api/bookings - create a booking
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<BookingCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let Json(payload) = payload.map_err(body_error)?;
    validate_contact(&payload.name, &payload.email, &payload.phone)?;

    let booking = state.bookings.create(payload);
    tracing::info!(
        id = booking.id.as_deref().unwrap_or_default(),
        date = %booking.date,
        time = %booking.time,
        guests = booking.guests.get(),
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// PUT /api/bookings/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<BookingUpdate>, JsonRejection>,
) -> AppResult<Json<Booking>> {
    let Json(payload) = payload.map_err(body_error)?;
    for (field, value) in [
        ("name", &payload.name),
        ("email", &payload.email),
        ("phone", &payload.phone),
    ] {
        if let Some(value) = value {
            require_non_empty(field, value)?;
        }
    }

    let booking = state
        .bookings
        .update(&id, payload)
        .ok_or_else(|| AppError::booking_not_found(&id))?;
    tracing::info!(id = %id, "Booking updated");
    Ok(Json(booking))
}

/// DELETE /api/bookings/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.bookings.delete(&id) {
        return Err(AppError::booking_not_found(&id));
    }
    tracing::info!(id = %id, "Booking deleted");
    Ok(Json(true))
}

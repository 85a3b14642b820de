//! Booking dialog routes
//!
//! The dialog lives server-side per (viewer, profile):
//! - POST   opens a fresh dialog
//! - GET    returns the current dialog
//! - PATCH  changes duration, date, time or message
//! - POST   /submit validates, emits the booking and closes the dialog
//! - DELETE cancels

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::{ApiJson, Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::domain::booking::BookingUpdate;
use crate::error::{ApiError, ApiResult};
use crate::session::CurrentUser;

use super::profiles::find_profile;

/// POST /profiles/:profile_id/booking
pub async fn open_booking(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let profile = find_profile(&state, &profile_id)?;
    let view = state.bookings.open(&viewer.id, &profile, state.clock.now());
    Ok(Json(DataResponse::new(view)))
}

/// GET /profiles/:profile_id/booking
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let view = state.bookings.view(&viewer.id, &profile_id)?;
    Ok(Json(DataResponse::new(view)))
}

/// PATCH /profiles/:profile_id/booking
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    viewer: CurrentUser,
    ApiJson(update): ApiJson<BookingUpdate>,
) -> ApiResult<impl IntoResponse> {
    let view = state.bookings.update(&viewer.id, &profile_id, update)?;
    Ok(Json(DataResponse::new(view)))
}

/// POST /profiles/:profile_id/booking/submit
///
/// An incomplete selection answers 400 and leaves the dialog open.
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let request = state
        .bookings
        .submit(&viewer.id, &profile_id)
        .map_err(ApiError::from)?;

    let delivered = state.outbox.emit(request.clone());
    tracing::info!(
        viewer_id = %viewer.id,
        profile_id = %request.profile_id,
        delivered,
        "Booking submitted"
    );

    Ok(Created(DataResponse::new(request)))
}

/// DELETE /profiles/:profile_id/booking
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    viewer: CurrentUser,
) -> ApiResult<NoContent> {
    if state.bookings.cancel(&viewer.id, &profile_id) {
        Ok(NoContent)
    } else {
        Err(ApiError::not_found(format!(
            "No booking dialog is open for profile {profile_id}"
        )))
    }
}

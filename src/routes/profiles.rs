//! Profile routes
//!
//! Directory search and the single-profile page.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::{ApiQuery, DataResponse};
use crate::app::AppState;
use crate::domain::directory::{DirectoryFilter, DirectoryQuery, DirectoryView, FilterOptions};
use crate::domain::profiles::{Profile, ProfileView};
use crate::error::{ApiError, ApiResult};

/// Look up a profile or fail with the recoverable not-found error.
pub(crate) fn find_profile(state: &AppState, profile_id: &str) -> ApiResult<Profile> {
    state
        .provider
        .get_profile(profile_id)
        .ok_or_else(|| ApiError::ProfileNotFound(profile_id.to_string()))
}

/// GET /profiles
///
/// Filter the directory by search text, category and price range.
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<DirectoryQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = DirectoryFilter::from_query(&query)?;
    let profiles = state.provider.list_profiles();
    let view = DirectoryView::new(filter.apply(&profiles));

    tracing::debug!(
        search = ?query.search,
        category = ?query.category,
        price = ?query.price,
        unfiltered = filter.is_unfiltered(),
        matches = view.total,
        "Directory filtered"
    );

    Ok(Json(DataResponse::new(view)))
}

/// GET /profiles/filters
pub async fn filter_options(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let profiles = state.provider.list_profiles();
    Json(DataResponse::new(FilterOptions::from_profiles(&profiles)))
}

/// GET /profiles/:profile_id
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let profile = find_profile(&state, &profile_id)?;
    Ok(Json(DataResponse::new(ProfileView::from(&profile))))
}

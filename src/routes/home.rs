use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::home::HomeView;

/// GET /
pub async fn get_home(State(state): State<Arc<AppState>>) -> Json<DataResponse<HomeView>> {
    let profiles = state.provider.list_profiles();
    Json(DataResponse::new(HomeView::new(&profiles)))
}

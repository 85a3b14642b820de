//! My calls routes

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::{ApiQuery, DataResponse};
use crate::app::AppState;
use crate::domain::calls::{CallTab, CallView, MyCallsView, TabCounts};
use crate::domain::profiles::ProfileSummary;
use crate::error::ApiResult;
use crate::session::CurrentUser;

#[derive(Debug, Deserialize, Default)]
pub struct CallsQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

/// GET /me/calls
///
/// The session user's calls for one tab, plus counts for every tab.
pub async fn my_calls(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CallsQuery>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let tab = match query.tab.as_deref() {
        None | Some("") => CallTab::default(),
        Some(raw) => raw.parse::<CallTab>()?,
    };

    let calls = state.provider.list_calls(&viewer.id);
    let views: Vec<CallView> = calls
        .iter()
        .filter(|call| tab.includes(call.status))
        .map(|call| {
            let profile = state
                .provider
                .get_profile(&call.profile_id)
                .map(|p| ProfileSummary::from(&p));
            CallView::new(call, profile)
        })
        .collect();

    Ok(Json(DataResponse::new(MyCallsView {
        tab,
        counts: TabCounts::tally(&calls),
        empty: views.is_empty(),
        calls: views,
    })))
}

use axum::Json;
use serde::Serialize;

use crate::domain::profiles::UserRole;
use crate::domain::views::View;
use crate::session::CurrentUser;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub calls_link: String,
}

/// Get the session user
pub async fn get_me(viewer: CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: viewer.id.clone(),
        name: viewer.name.clone(),
        email: viewer.email.clone(),
        avatar: viewer.avatar.clone(),
        role: viewer.role,
        calls_link: View::MyCalls.path(),
    })
}

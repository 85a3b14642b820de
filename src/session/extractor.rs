use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::profiles::User;

/// Extractor for the session user.
///
/// Example:
/// ```ignore
/// async fn whoami(viewer: CurrentUser) -> String {
///     format!("Hello, {}", viewer.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.session.user().clone()))
    }
}

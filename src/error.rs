//! Unified API error handling
//!
//! Every handler returns `ApiResult`; domain errors convert into `ApiError`
//! so the JSON error shape stays the same across endpoints.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::booking::BookingError;
use crate::domain::calls::CallsError;
use crate::domain::directory::DirectoryError;
use crate::domain::views::View;
use crate::services::booking::DialogError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unknown profile id. Rendered with a link back to the directory.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Please select a date and time")]
    BookingIncomplete,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_link: Option<String>,
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::BookingIncomplete => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::ProfileNotFound(_) => "PROFILE_NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::BookingIncomplete => "BOOKING_INCOMPLETE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::ProfileNotFound(_) => "Influencer not found".to_string(),
            Self::BookingIncomplete => self.to_string(),
            // Don't leak internal error details
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    fn recovery_link(&self) -> Option<String> {
        match self {
            Self::ProfileNotFound(_) => Some(View::Directory.path()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");
            }
            _ => {
                tracing::warn!(error = %self, "API error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
            recovery_link: self.recovery_link(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Incomplete => Self::BookingIncomplete,
            other => Self::BadRequest(other.to_string()),
        }
    }
}

impl From<DialogError> for ApiError {
    fn from(err: DialogError) -> Self {
        match err {
            DialogError::Booking(inner) => inner.into(),
            not_open @ DialogError::NotOpen(_) => Self::NotFound(not_open.to_string()),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<CallsError> for ApiError {
    fn from(err: CallsError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn error_to_response(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn profile_not_found_links_back_to_directory() {
        let (status, json) = error_to_response(ApiError::ProfileNotFound("nope".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "PROFILE_NOT_FOUND");
        assert_eq!(json["recoveryLink"], "/influencers");
    }

    #[tokio::test]
    async fn incomplete_booking_is_a_correctable_bad_request() {
        let (status, json) = error_to_response(BookingError::Incomplete.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BOOKING_INCOMPLETE");
        assert_eq!(json["message"], "Please select a date and time");
        assert!(json.get("recoveryLink").is_none());
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let err = ApiError::Internal(anyhow::anyhow!("seed data corrupted at row 3"));
        let (status, json) = error_to_response(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "An internal error occurred");
    }
}

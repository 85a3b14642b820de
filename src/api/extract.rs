//! Request extractors that reject with `ApiError`
//!
//! axum's stock `Json` and `Query` answer malformed input with a plain-text
//! 4xx. These wrappers route the rejection through `ApiError` so every bad
//! request carries the same `{code, message}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

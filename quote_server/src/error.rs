//! HTTP mapping of the shared error type.
//!
//! Handlers return `ApiError`, which turns into a plain-text response:
//! `405` for a method other than GET, `500` with the failure message for
//! everything that goes wrong while fetching or recording a quote.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use quote_common::QuoteError;

/// Failure of a single request.
#[derive(Debug)]
pub enum ApiError {
    /// The route only answers GET.
    MethodNotAllowed,
    /// Upstream or storage failure.
    Internal(QuoteError),
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "method not allowed").into_response()
            }
            ApiError::Internal(err) => {
                if err.is_timeout() {
                    warn!("Request timed out: {}", err);
                } else {
                    error!("Request failed: {}", err);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

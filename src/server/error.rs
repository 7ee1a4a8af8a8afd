//! HTTP-facing error type.

use crate::error::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Failure that ends a request with a generic 500 page.
///
/// Storage errors are not recovered; the details go to the log only.
#[derive(Debug)]
pub struct AppError(StoreError);

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

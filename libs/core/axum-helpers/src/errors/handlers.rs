use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Router fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!("No route for {}", uri.path())).into_response()
}

//! Fallback routes.

use crate::error::AppError;
use axum::http::Uri;

/// 404 fallback.
pub async fn notfound_404(uri: Uri) -> AppError {
    AppError::route_not_found(uri.path())
}

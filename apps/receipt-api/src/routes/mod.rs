pub mod health;
pub mod receipts;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

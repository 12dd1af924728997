//! # Receipt API
//!
//! HTTP service that validates receipts, stores them, and reports points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Routes                              │
//! │                                                                         │
//! │  ┌────────────────────────┐  ┌────────────────────────┐                │
//! │  │  POST /receipts/process│  │  GET /receipts/{id}/   │                │
//! │  │                        │  │      points            │                │
//! │  │ • normalize            │  │ • store.read           │                │
//! │  │ • store.write          │  │ • calculate_points     │                │
//! │  │ → { "id": ... }        │  │ → { "points": ... }    │                │
//! │  └────────────────────────┘  └────────────────────────┘                │
//! │                                                                         │
//! │  GET /receipts/{id}   normalized receipt                               │
//! │  GET /health          liveness + record count                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `BIND_ADDR` - Interface to bind (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 3000)
//! - `LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! - `MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30)

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use std::any::Any;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use receipt_store::{MemoryStore, ReceiptStore};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use server::start_server;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new(config: ApiConfig) -> Self {
        AppState::with_store(config, Arc::new(MemoryStore::new()))
    }

    pub fn with_store(config: ApiConfig, store: Arc<dyn ReceiptStore>) -> Self {
        AppState {
            store,
            config: Arc::new(config),
        }
    }
}

/// Builds the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(routes::receipts::process_receipt))
        .route("/receipts/{id}/points", get(routes::receipts::get_points))
        .route("/receipts/{id}", get(routes::receipts::get_receipt))
        .route("/health", get(routes::health::health_check))
        .fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::internal(format!("Handler panicked: {detail}")).into_response()
}

//! # Receipt Endpoints
//!
//! ```text
//! POST /receipts/process      raw JSON ──► normalize ──► store.write ──► { id }
//! GET  /receipts/{id}/points  store.read ──► calculate_points ──► { points }
//! GET  /receipts/{id}         store.read ──► normalized receipt
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_core::{normalize, PointsBreakdown, Receipt};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptResponse {
    pub id: String,
    #[serde(flatten)]
    pub receipt: Receipt,
}

/// Validates and stores a submitted receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(raw) = payload?;

    let receipt = normalize(&raw).inspect_err(|err| {
        debug!(field = %err.field(), detail = %err.detail(), "Rejected receipt");
    })?;

    let stored = state.store.write(receipt).await?;
    info!(id = %stored.id, items = stored.receipt.items().len(), "Receipt processed");

    Ok(Json(ProcessResponse { id: stored.id }))
}

/// Scores a stored receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let stored = state.store.read(&id).await?;

    let breakdown = PointsBreakdown::for_receipt(&stored.receipt);
    debug!(id = %id, ?breakdown, "Points calculated");

    Ok(Json(PointsResponse {
        points: breakdown.total(),
    }))
}

/// Returns the normalized form of a stored receipt.
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReceiptResponse>> {
    let stored = state.store.read(&id).await?;

    Ok(Json(ReceiptResponse {
        id: stored.id,
        receipt: stored.receipt,
    }))
}

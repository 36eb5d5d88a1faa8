//! Configuration document API endpoints - JSON API
//!
//! Both operations are a single best-effort attempt against the store:
//! no retries, no merge semantics, last writer wins. Each request emits
//! exactly one log line recording success or failure.

use crate::{ApiError, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use confedit_store::StoreError;
use serde_json::Value;

/// GET /api/config - return the full configuration document
pub async fn api_config_get(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, ApiError> {
    match state.store.read() {
        Ok(document) => {
            tracing::info!("✓ configuration read: {}", state.store.path().display());
            Ok(Json(ApiResponse::data(document)))
        }
        Err(err @ StoreError::NotFound { .. }) => {
            tracing::warn!("✗ configuration missing: {}", state.store.path().display());
            Err(err.into())
        }
        Err(err) => {
            tracing::error!("✗ configuration read failed: {}", err);
            Err(err.into())
        }
    }
}

/// POST /api/config - overwrite the configuration document in full
///
/// The body is taken as-is; no schema is enforced. A body that cannot
/// be parsed as JSON still gets the uniform failure envelope, so the
/// extractor rejection is handled here instead of escaping as a
/// plain-text response.
pub async fn api_config_save(
    State(state): State<AppState>,
    document: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(document) = document.map_err(|err| {
        tracing::error!("✗ configuration save failed: {}", err);
        ApiError::Internal {
            message: err.body_text(),
        }
    })?;

    match state.store.write(&document) {
        Ok(size) => {
            tracing::info!(
                "✓ configuration saved: {} ({:.2} KB)",
                state.store.path().display(),
                size as f64 / 1024.0
            );
            Ok(Json(ApiResponse::message("configuration saved")))
        }
        Err(err) => {
            tracing::error!("✗ configuration save failed: {}", err);
            Err(err.into())
        }
    }
}

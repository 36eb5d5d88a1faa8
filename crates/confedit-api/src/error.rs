//! Error types for confedit-api

use crate::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use confedit_store::StoreError;
use thiserror::Error;

/// API error with its HTTP status mapping
///
/// The underlying message is passed through to the client verbatim in
/// the failure envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound {
                message: err.to_string(),
            },
            StoreError::Io(_) | StoreError::Parse(_) => ApiError::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::error(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

//! HTTP API server for the configuration editor
//!
//! Routes are organized into modules:
//! - routes::config: configuration document read/write (JSON API)
//! - routes::editor: the static editor page

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use confedit_config::Config;
use confedit_store::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
}

/// Uniform response envelope for the JSON API
///
/// Serializes to `{success, data | message | error}` with absent
/// fields omitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Success envelope carrying a document
    pub fn data(document: Value) -> Self {
        Self {
            success: true,
            data: Some(document),
            message: None,
            error: None,
        }
    }

    /// Success envelope carrying a message
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(text.into()),
            error: None,
        }
    }

    /// Failure envelope carrying an error message
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(text.into()),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::config::{api_config_get, api_config_save};
    use routes::editor::page_editor;

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/config", get(api_config_get))
        .route("/api/config", post(api_config_save))
        .route("/", get(page_editor))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Binds to the configured address and serves requests until the
/// process is stopped.
pub async fn start_server(config: Config, store: Arc<DocumentStore>) {
    let addr = config.listen_addr();
    let state = AppState { store };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Starting confedit server on http://{}", addr);
    tracing::info!("Available routes:");
    tracing::info!("  - / (Editor page)");
    tracing::info!("  - /api/config (Configuration document)");
    tracing::info!("  - /api/health (Health check)");

    match axum::serve(listener, router).await {
        Ok(_) => tracing::info!("Server stopped gracefully"),
        Err(e) => tracing::error!("Server error: {}", e),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn test_router(dir: &tempfile::TempDir) -> Router {
        let store = Arc::new(DocumentStore::new(dir.path().join("content-config.json")));
        create_router(AppState { store })
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, document: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(document).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(&dir).oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_editor_page_served_at_root() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(&dir).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<html"));
        assert!(page.contains("/api/config"));
    }

    #[tokio::test]
    async fn test_get_config_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(&dir).oneshot(get("/api/config")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("configuration file does not exist"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(&dir);
        let document = json!({"title": "龙高北", "chapters": [1, 2, 3]});

        let response = router
            .clone()
            .oneshot(post_json("/api/config", &document))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("configuration saved"));

        let response = router.oneshot(get("/api/config")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], document);
    }

    #[tokio::test]
    async fn test_save_fully_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(&dir);

        router
            .clone()
            .oneshot(post_json("/api/config", &json!({"a": 1, "stale": true})))
            .await
            .unwrap();
        router
            .clone()
            .oneshot(post_json("/api/config", &json!({"b": 2})))
            .await
            .unwrap();

        let response = router.oneshot(get("/api/config")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"], json!({"b": 2}));
    }

    #[tokio::test]
    async fn test_save_malformed_body_is_500_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/api/config")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let response = test_router(&dir).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_get_config_corrupted_file_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(&dir);

        router
            .clone()
            .oneshot(post_json("/api/config", &json!({"ok": true})))
            .await
            .unwrap();
        std::fs::write(dir.path().join("content-config.json"), "{ not json").unwrap();

        let response = router.oneshot(get("/api/config")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("invalid JSON content"));
    }

    #[test]
    fn test_envelope_field_presence() {
        let data = serde_json::to_value(ApiResponse::data(json!({"k": 1}))).unwrap();
        assert_eq!(data, json!({"success": true, "data": {"k": 1}}));

        let message = serde_json::to_value(ApiResponse::message("configuration saved")).unwrap();
        assert_eq!(message, json!({"success": true, "message": "configuration saved"}));

        let error = serde_json::to_value(ApiResponse::error("boom")).unwrap();
        assert_eq!(error, json!({"success": false, "error": "boom"}));
    }
}

//! Editor page - fixed HTML document served at the root path

use axum::response::Html;

const EDITOR_PAGE: &str = include_str!("../../../templates/editor.html");

/// GET / - the editor page
pub async fn page_editor() -> Html<&'static str> {
    tracing::info!("→ editor page requested");
    Html(EDITOR_PAGE)
}

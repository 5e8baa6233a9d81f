//! Front-end routes.
//!
//! The task board page is compiled into the binary so the server works with
//! no files on disk; `/static/*` serves extra assets from the configured
//! directory via `ServeDir`.

use axum::response::Html;

/// The task board single-page UI.
const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// `GET /` — the task board page.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

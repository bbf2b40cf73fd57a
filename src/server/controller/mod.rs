//! HTTP request handlers.
//!
//! Controllers convert incoming DTOs into operation params, call the matching
//! service, and map the outcome onto HTTP status codes and response DTOs.
//! Every handler is annotated with a `utoipa::path` so the OpenAPI document
//! stays in sync with the routes.

use axum::response::Html;

pub mod hero;
pub mod hero_power;
pub mod power;

/// Index page.
///
/// Serves a minimal HTML banner so hitting the server root in a browser shows
/// something friendlier than a 404.
///
/// # Returns
/// - `200 OK` - HTML banner
#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    responses(
        (status = 200, description = "HTML banner", content_type = "text/html")
    ),
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Herodex API</h1>")
}

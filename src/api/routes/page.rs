//! Dashboard Page Route
//!
//! - GET / - The single dashboard page

use axum::response::Html;

/// GET /
///
/// Serves the dashboard page. The page is embedded in the binary at
/// compile time; all data reaches it through the JSON endpoints.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

//! Dashboard Metadata Route
//!
//! - GET /api/v1/meta - Site list and control bounds for the page

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{DashboardMeta, SliderMeta};
use crate::api::state::AppState;

/// GET /api/v1/meta
///
/// Dashboard metadata: the distinct site list for the dropdown, the
/// dataset payload bounds, and the range control bounds.
pub async fn dashboard_meta(State(state): State<Arc<AppState>>) -> Json<DashboardMeta> {
    let bounds = state.dataset.payload_bounds();

    Json(DashboardMeta {
        sites: state.dataset.sites().to_vec(),
        record_count: state.dataset.len(),
        payload_min: bounds.min,
        payload_max: bounds.max,
        slider: SliderMeta::default(),
    })
}

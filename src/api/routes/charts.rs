//! Chart Routes
//!
//! The two reactive slots over HTTP: the page re-fetches the relevant
//! chart whenever a bound control changes.
//!
//! - GET /api/v1/charts/pie - Success-proportion pie chart
//! - GET /api/v1/charts/scatter - Payload-vs-outcome scatter chart

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PieParams, ScatterParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{build_pie, build_scatter, PieChart, ScatterChart};
use crate::dataset::PayloadRange;

/// GET /api/v1/charts/pie?site=…
///
/// Out-of-set site values degrade to a zero-valued chart rather than
/// an error.
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> Json<PieChart> {
    Json(build_pie(&state.dataset, &params.site))
}

/// GET /api/v1/charts/scatter?site=…&payload_min=…&payload_max=…
///
/// A vacuous range (min > max) yields an empty chart, not an error;
/// only non-finite bounds are rejected.
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<ScatterChart>> {
    if !params.payload_min.is_finite() || !params.payload_max.is_finite() {
        return Err(ApiError::Validation(
            "payload bounds must be finite numbers".to_string(),
        ));
    }

    let range = PayloadRange::new(params.payload_min, params.payload_max);
    Ok(Json(build_scatter(&state.dataset, &params.site, range)))
}

//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON and query
//! strings.

use serde::{Deserialize, Serialize};

use crate::dashboard::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};
use crate::dataset::SiteSelection;

// ============================================
// DASHBOARD METADATA DTOs
// ============================================

/// Dashboard metadata response
///
/// Everything the page needs to build its controls: the site list for
/// the dropdown and the bounds for the payload range control.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardMeta {
    /// Distinct launch sites, in dataset order
    pub sites: Vec<String>,
    /// Total number of launch records
    pub record_count: usize,
    /// Minimum payload mass in the dataset (kg)
    pub payload_min: f64,
    /// Maximum payload mass in the dataset (kg)
    pub payload_max: f64,
    /// Range control bounds
    pub slider: SliderMeta,
}

/// Payload range control bounds
#[derive(Debug, Serialize, Deserialize)]
pub struct SliderMeta {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderMeta {
    fn default() -> Self {
        Self {
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
        }
    }
}

// ============================================
// CHART QUERY DTOs
// ============================================

/// Query parameters for the pie chart endpoint
#[derive(Debug, Deserialize)]
pub struct PieParams {
    /// Site selection; defaults to all sites
    #[serde(default)]
    pub site: SiteSelection,
}

/// Query parameters for the scatter chart endpoint
#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    /// Site selection; defaults to all sites
    #[serde(default)]
    pub site: SiteSelection,
    /// Lower payload bound (kg); defaults to the slider minimum
    #[serde(default = "default_payload_min")]
    pub payload_min: f64,
    /// Upper payload bound (kg); defaults to the slider maximum
    #[serde(default = "default_payload_max")]
    pub payload_max: f64,
}

fn default_payload_min() -> f64 {
    PAYLOAD_SLIDER_MIN
}

fn default_payload_max() -> f64 {
    PAYLOAD_SLIDER_MAX
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Number of loaded launch records
    pub record_count: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

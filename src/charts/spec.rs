//! Chart specification types
//!
//! Renderable chart descriptions, serialized to JSON for the page to
//! draw. The frontend owns colors and layout; the specs carry only
//! data series, labels, and titles.

use serde::{Deserialize, Serialize};

/// A proportion chart: labeled slices plus a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One pie slice, its label explicitly paired with its count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieChart {
    /// Sum of all slice values
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// A correlation chart: one point per record plus a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// One scatter point: payload mass vs. outcome class, keyed by booster
/// category for coloring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass: f64,
    pub outcome: u8,
    pub booster_category: String,
}

//! Reactive binding layer
//!
//! Binds the dashboard controls to the chart builders. There are
//! exactly two independent slots:
//!
//! - pie slot: input = site selection, output = a fresh pie chart
//! - scatter slot: inputs = site selection + payload range, output = a
//!   fresh scatter chart
//!
//! Recomputation is edge-driven: [`Dashboard::apply`] re-renders only
//! the slots bound to the control that changed, replacing the
//! previously displayed chart wholesale. Each slot is a pure mapping
//! from current control values, so applying the same change twice
//! leaves the displayed content unchanged.

use std::sync::Arc;

use crate::charts::{build_pie, build_scatter, PieChart, ScatterChart};
use crate::dataset::{LaunchDataset, PayloadRange, SiteSelection};

/// Lower bound of the payload range control, kg
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the payload range control, kg
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
/// Step of the payload range control, kg
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Current values of the bound controls
///
/// Owned by the UI layer, read by the chart builders on each update,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    /// Initial control values: all sites, full slider range
    pub fn initial() -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX),
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A change notification from one of the bound controls
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Site(SiteSelection),
    PayloadRange(PayloadRange),
}

/// Per-session dashboard state: current control values plus the two
/// displayed charts
///
/// Holds a shared read-only handle to the dataset; the dataset itself
/// is never mutated.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<LaunchDataset>,
    state: SelectionState,
    pie: PieChart,
    scatter: ScatterChart,
}

impl Dashboard {
    /// Create a dashboard with initial control values and both charts
    /// rendered
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let state = SelectionState::initial();
        let pie = build_pie(&dataset, &state.site);
        let scatter = build_scatter(&dataset, &state.site, state.payload_range);
        Self {
            dataset,
            state,
            pie,
            scatter,
        }
    }

    /// Apply a control change and re-render the affected slots
    ///
    /// The site control feeds both charts; the payload range feeds
    /// only the scatter chart.
    pub fn apply(&mut self, change: ControlChange) {
        match change {
            ControlChange::Site(site) => {
                self.state.site = site;
                self.pie = build_pie(&self.dataset, &self.state.site);
                self.scatter =
                    build_scatter(&self.dataset, &self.state.site, self.state.payload_range);
            }
            ControlChange::PayloadRange(range) => {
                self.state.payload_range = range;
                self.scatter =
                    build_scatter(&self.dataset, &self.state.site, self.state.payload_range);
            }
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The currently displayed pie chart
    pub fn pie_chart(&self) -> &PieChart {
        &self.pie
    }

    /// The currently displayed scatter chart
    pub fn scatter_chart(&self) -> &ScatterChart {
        &self.scatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, category: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: payload,
            booster_category: category.to_string(),
            outcome,
        }
    }

    fn sample_dataset() -> Arc<LaunchDataset> {
        Arc::new(
            LaunchDataset::from_records(vec![
                record("A", 500.0, "v1", Outcome::Success),
                record("A", 1500.0, "v1", Outcome::Failure),
                record("B", 800.0, "v2", Outcome::Success),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_initial_render() {
        let dashboard = Dashboard::new(sample_dataset());

        assert_eq!(dashboard.state().site, SiteSelection::All);
        assert_eq!(
            dashboard.state().payload_range,
            PayloadRange::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
        );
        assert_eq!(dashboard.pie_chart().slices.len(), 2);
        assert_eq!(dashboard.scatter_chart().points.len(), 3);
    }

    #[test]
    fn test_site_change_replaces_both_charts() {
        let mut dashboard = Dashboard::new(sample_dataset());
        let pie_before = dashboard.pie_chart().clone();
        let scatter_before = dashboard.scatter_chart().clone();

        dashboard.apply(ControlChange::Site(SiteSelection::Site("A".to_string())));

        assert_ne!(dashboard.pie_chart(), &pie_before);
        assert_ne!(dashboard.scatter_chart(), &scatter_before);
        assert_eq!(dashboard.pie_chart().slices[0].label, "Success");
        assert_eq!(dashboard.scatter_chart().points.len(), 2);
    }

    #[test]
    fn test_range_change_leaves_pie_untouched() {
        let mut dashboard = Dashboard::new(sample_dataset());
        let pie_before = dashboard.pie_chart().clone();

        dashboard.apply(ControlChange::PayloadRange(PayloadRange::new(0.0, 1000.0)));

        assert_eq!(dashboard.pie_chart(), &pie_before);
        assert_eq!(dashboard.scatter_chart().points.len(), 2);
    }

    #[test]
    fn test_range_then_site_combines_predicates() {
        let mut dashboard = Dashboard::new(sample_dataset());

        dashboard.apply(ControlChange::PayloadRange(PayloadRange::new(0.0, 1000.0)));
        dashboard.apply(ControlChange::Site(SiteSelection::Site("A".to_string())));

        // Only A's 500 kg launch falls inside [0, 1000]
        assert_eq!(dashboard.scatter_chart().points.len(), 1);
        assert_eq!(dashboard.scatter_chart().points[0].payload_mass, 500.0);
    }

    #[test]
    fn test_reapplying_same_change_is_stable() {
        let mut dashboard = Dashboard::new(sample_dataset());

        dashboard.apply(ControlChange::Site(SiteSelection::Site("B".to_string())));
        let pie_after_first = dashboard.pie_chart().clone();
        let scatter_after_first = dashboard.scatter_chart().clone();

        dashboard.apply(ControlChange::Site(SiteSelection::Site("B".to_string())));

        assert_eq!(dashboard.pie_chart(), &pie_after_first);
        assert_eq!(dashboard.scatter_chart(), &scatter_after_first);
    }

    #[test]
    fn test_out_of_set_site_degrades_to_empty() {
        let mut dashboard = Dashboard::new(sample_dataset());

        dashboard.apply(ControlChange::Site(SiteSelection::Site(
            "nowhere".to_string(),
        )));

        assert_eq!(dashboard.pie_chart().total(), 0);
        assert!(dashboard.scatter_chart().points.is_empty());
    }
}

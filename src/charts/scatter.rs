//! Correlation chart builder
//!
//! Plots payload mass against the landing outcome class for every
//! record surviving the site and payload filters, keyed by booster
//! version category for coloring.

use crate::dataset::{LaunchDataset, PayloadRange, SiteSelection};

use super::spec::{ScatterChart, ScatterPoint};

/// Build the payload-vs-outcome scatter chart for a site selection and
/// payload range
///
/// An empty filtered subset yields an empty chart, never an error.
pub fn build_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points = dataset
        .filter(site, range)
        .into_iter()
        .map(|record| ScatterPoint {
            payload_mass: record.payload_mass,
            outcome: record.outcome.class(),
            booster_category: record.booster_category.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => format!(
            "Outcome (class=1 for successful booster landing, class=0 otherwise) \
             of all Launches with Payload between {} kg and {} kg",
            range.min, range.max
        ),
        SiteSelection::Site(name) => format!(
            "Outcome (class=1 for successful booster landing, class=0 otherwise) \
             of all Launches from Site {} with Payload between {} kg and {} kg",
            name, range.min, range.max
        ),
    };

    ScatterChart { title, points }
}

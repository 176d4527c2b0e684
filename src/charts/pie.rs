//! Proportion chart builder
//!
//! With all sites selected the chart breaks total successful landings
//! down by site; with a specific site selected it shows that site's
//! success/failure split.

use crate::dataset::{LaunchDataset, Outcome, SiteSelection};

use super::spec::{PieChart, PieSlice};

const ALL_SITES_TITLE: &str = "Total Launches with successful booster landing By Site";

/// Build the success-proportion pie chart for a site selection
///
/// A site with zero records yields zero-valued slices rather than an
/// error.
pub fn build_pie(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .iter()
                .map(|site_name| PieSlice {
                    label: site_name.clone(),
                    value: dataset
                        .records()
                        .iter()
                        .filter(|r| &r.site == site_name && r.outcome.is_success())
                        .count() as u64,
                })
                .collect();

            PieChart {
                title: ALL_SITES_TITLE.to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let mut successes = 0u64;
            let mut failures = 0u64;
            for record in dataset.records().iter().filter(|r| &r.site == name) {
                match record.outcome {
                    Outcome::Success => successes += 1,
                    Outcome::Failure => failures += 1,
                }
            }

            // Each label carries its own count; no positional pairing
            // between a label list and a separately computed count list.
            PieChart {
                title: format!(
                    "Proportion of Launches with successful booster landing from Launch Site {}",
                    name
                ),
                slices: vec![
                    PieSlice {
                        label: "Success".to_string(),
                        value: successes,
                    },
                    PieSlice {
                        label: "Failure".to_string(),
                        value: failures,
                    },
                ],
            }
        }
    }
}

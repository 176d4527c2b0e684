//! Filter engine
//!
//! Selects the subset of records matching a site selection and a
//! payload range. There are no error conditions: an unmatched site or
//! a vacuous range just yields an empty subset.

use super::loader::LaunchDataset;
use super::types::{LaunchRecord, PayloadRange, SiteSelection};

/// Filter a record slice by site and payload range
///
/// The payload predicate is inclusive on both ends and applies
/// regardless of the site selection.
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|record| match site {
            SiteSelection::All => true,
            SiteSelection::Site(name) => &record.site == name,
        })
        .filter(|record| range.contains(record.payload_mass))
        .collect()
}

impl LaunchDataset {
    /// Records matching both the site and payload predicates
    pub fn filter(&self, site: &SiteSelection, range: PayloadRange) -> Vec<&LaunchRecord> {
        filter_records(self.records(), site, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::types::Outcome;

    fn record(site: &str, payload: f64, category: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: payload,
            booster_category: category.to_string(),
            outcome,
        }
    }

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            record("A", 500.0, "v1", Outcome::Success),
            record("A", 1500.0, "v1", Outcome::Failure),
            record("B", 800.0, "v2", Outcome::Success),
        ]
    }

    #[test]
    fn test_all_sites_full_range() {
        let records = sample_records();
        let subset = filter_records(&records, &SiteSelection::All, PayloadRange::new(0.0, 10_000.0));
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn test_site_predicate_over_dataset_bounds() {
        // filter(D, s, [min(D), max(D)]) returns exactly the records with site == s
        let dataset = LaunchDataset::from_records(sample_records()).unwrap();
        let bounds = dataset.payload_bounds();

        for site in dataset.sites() {
            let subset = dataset.filter(&SiteSelection::Site(site.clone()), bounds);
            let expected: Vec<_> = dataset.records().iter().filter(|r| &r.site == site).collect();
            assert_eq!(subset, expected);
        }
    }

    #[test]
    fn test_payload_range_applied_with_site() {
        let records = sample_records();
        let subset = filter_records(
            &records,
            &SiteSelection::Site("A".to_string()),
            PayloadRange::new(1000.0, 2000.0),
        );
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].payload_mass, 1500.0);
    }

    #[test]
    fn test_inclusive_bounds() {
        let records = sample_records();
        let subset = filter_records(&records, &SiteSelection::All, PayloadRange::new(500.0, 800.0));
        let masses: Vec<f64> = subset.iter().map(|r| r.payload_mass).collect();
        assert_eq!(masses, vec![500.0, 800.0]);
    }

    #[test]
    fn test_vacuous_range_is_empty() {
        let records = sample_records();
        let subset = filter_records(&records, &SiteSelection::All, PayloadRange::new(2000.0, 100.0));
        assert!(subset.is_empty());
    }

    #[test]
    fn test_unmatched_site_is_empty() {
        let records = sample_records();
        let subset = filter_records(
            &records,
            &SiteSelection::Site("nowhere".to_string()),
            PayloadRange::new(0.0, 10_000.0),
        );
        assert!(subset.is_empty());
    }

    #[test]
    fn test_spec_scenario_subset() {
        // filter(D, "ALL", [0, 1000]) keeps records 1 and 3
        let records = sample_records();
        let subset = filter_records(&records, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(subset.len(), 2);
        assert_eq!(subset[0].payload_mass, 500.0);
        assert_eq!(subset[1].payload_mass, 800.0);
    }
}

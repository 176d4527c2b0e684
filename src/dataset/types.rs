//! Core data types for the launch records dataset
//!
//! This module defines the value types used throughout the application:
//! - `LaunchRecord`: one historical launch
//! - `Outcome`: binary booster landing outcome
//! - `PayloadRange`: inclusive payload mass interval
//! - `SiteSelection`: dropdown value, "ALL" or a specific site

use serde::{Deserialize, Serialize};

/// Binary launch outcome.
///
/// Stored in the source data as the `class` column: 1 for a successful
/// booster landing, 0 otherwise. Any other value is rejected at load
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    /// Booster landed successfully (class = 1)
    Success,
    /// Booster did not land successfully (class = 0)
    Failure,
}

impl Outcome {
    /// Whether this outcome counts as a successful landing
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric class value as used in the source data (1 = success)
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Outcome::Success),
            0 => Ok(Outcome::Failure),
            other => Err(format!("invalid outcome class: {} (expected 0 or 1)", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.class()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

/// One historical launch record
///
/// Field names map to the source CSV columns. Columns not listed here
/// (flight numbers, full booster versions) are ignored by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier
    #[serde(rename = "Launch Site")]
    pub site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass: f64,
    /// Booster version category, used as the scatter color dimension
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
    /// Landing outcome
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

/// Inclusive payload mass interval, in kilograms
///
/// The UI keeps `min <= max`, but a vacuous range (min > max) is a
/// valid filter input and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a payload mass falls inside the range, both ends inclusive
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.min && mass <= self.max
    }

    /// A range with min > max matches no record
    pub fn is_vacuous(&self) -> bool {
        self.min > self.max
    }
}

/// Site dropdown value: every site, or one specific site
///
/// Serialized as the sentinel string `"ALL"` or the site name, matching
/// the value the dropdown sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Sentinel dropdown value meaning "no site predicate"
    pub const ALL_VALUE: &'static str = "ALL";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::All
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", Self::ALL_VALUE),
            SiteSelection::Site(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SiteSelection::parse(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn test_outcome_class_roundtrip() {
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failure.is_success());
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_payload_range_vacuous() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_vacuous());
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }

    #[test]
    fn test_site_selection_parse() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("CCAFS LC-40"),
            SiteSelection::Site("CCAFS LC-40".to_string())
        );
    }

    #[test]
    fn test_site_selection_display() {
        assert_eq!(SiteSelection::All.to_string(), "ALL");
        assert_eq!(
            SiteSelection::Site("KSC LC-39A".to_string()).to_string(),
            "KSC LC-39A"
        );
    }

    #[test]
    fn test_launch_record_csv_columns() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
                        CCAFS LC-40,2500.5,v1.1,1";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let record: LaunchRecord = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(record.site, "CCAFS LC-40");
        assert_eq!(record.payload_mass, 2500.5);
        assert_eq!(record.booster_category, "v1.1");
        assert_eq!(record.outcome, Outcome::Success);
    }
}

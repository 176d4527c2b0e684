//! Dataset loading
//!
//! Reads launch records from a CSV file once at startup and computes
//! the derived facts the dashboard needs: the distinct site list (in
//! first-seen order) and the payload mass bounds.
//!
//! Any load failure is fatal to the caller: the application must not
//! serve a page without a loaded dataset.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::types::{LaunchRecord, PayloadRange};

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Could not read the dataset file
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed into a launch record
    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed but held no records
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// The in-memory launch dataset
///
/// Ordered records plus derived facts computed once at construction.
/// Never mutated after loading, so it is shared read-only across all
/// request handlers without locks.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: PayloadRange,
}

impl LaunchDataset {
    /// Build a dataset from already-parsed records, computing derived facts
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        // Distinct sites in first-seen order
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.site) {
                sites.push(record.site.clone());
            }
        }

        let min = records
            .iter()
            .map(|r| r.payload_mass)
            .fold(f64::INFINITY, f64::min);
        let max = records
            .iter()
            .map(|r| r.payload_mass)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            sites,
            payload_bounds: PayloadRange::new(min, max),
        })
    }

    /// Load a dataset from a CSV file
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a dataset from any reader (useful for testing)
    ///
    /// Expects a header row; columns beyond the ones named in
    /// [`LaunchRecord`] are ignored.
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: LaunchRecord = result?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct site names, in first-seen order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Minimum and maximum payload mass across all records
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a site name appears in the dataset
    pub fn has_site(&self, name: &str) -> bool {
        self.sites.iter().any(|s| s == name)
    }
}

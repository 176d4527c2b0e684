//! Launch records dataset
//!
//! The dataset is read once from a CSV file at startup and is
//! immutable afterwards. Derived facts (the distinct site list and the
//! payload mass bounds) are computed at construction time so handlers
//! never re-scan the records for them.

pub mod filter;
pub mod loader;
pub mod types;

pub use filter::filter_records;
pub use loader::{DatasetError, DatasetResult, LaunchDataset};
pub use types::{LaunchRecord, Outcome, PayloadRange, SiteSelection};

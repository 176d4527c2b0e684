//! # Launchboard
//!
//! Interactive launch records dashboard - a Rust web application for
//! exploring historical rocket launch outcomes.
//!
//! A fixed CSV dataset is loaded once at startup and served as a
//! single-page dashboard: a launch-site dropdown, a success-proportion
//! pie chart, a payload range control, and a payload-vs-outcome
//! scatter chart.
//!
//! ## Modules
//!
//! - [`dataset`]: Launch record model, CSV loading, filter engine
//! - [`charts`]: Pure pie/scatter chart builders
//! - [`dashboard`]: Reactive binding between controls and builders
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::dataset::{LaunchDataset, PayloadRange, SiteSelection};
//! use launchboard::charts::{build_pie, build_scatter};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = LaunchDataset::from_path(Path::new("data/launch_records.csv"))?;
//!
//!     let pie = build_pie(&dataset, &SiteSelection::All);
//!     let scatter = build_scatter(
//!         &dataset,
//!         &SiteSelection::All,
//!         PayloadRange::new(0.0, 10_000.0),
//!     );
//!
//!     println!("{} slices, {} points", pie.slices.len(), scatter.points.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    DatasetError, DatasetResult, LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection,
};

pub use charts::{build_pie, build_scatter, PieChart, PieSlice, ScatterChart, ScatterPoint};

pub use dashboard::{ControlChange, Dashboard, SelectionState};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};

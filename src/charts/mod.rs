//! Chart builders
//!
//! Two independent pure functions transform a record subset into a
//! renderable chart specification: a success-proportion pie chart and
//! a payload-vs-outcome scatter chart. Every call returns a fresh
//! spec; nothing is mutated in place.

pub mod pie;
pub mod scatter;
pub mod spec;

pub use pie::build_pie;
pub use scatter::build_scatter;
pub use spec::{PieChart, PieSlice, ScatterChart, ScatterPoint};

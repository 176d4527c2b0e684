//! API route handlers

pub mod charts;
pub mod health;
pub mod meta;
pub mod page;

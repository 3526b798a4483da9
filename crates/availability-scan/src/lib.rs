//! # Availability Scan
//!
//! This crate checks campgrounds and timed-entry facilities on Recreation.gov for
//! open availability. It evaluates the raw availability payloads, runs the sequential
//! per-site check and formats the operator report.

/// Types for availability scan operations
mod scan_types;
pub use scan_types::*;

/// Pure evaluation of availability payloads
pub mod evaluator;
pub use evaluator::{evaluate_campground, evaluate_timed_entry};

/// Human-readable reports and booking links
pub mod report;
pub use report::*;

/// Sequential fetch-evaluate pipeline over a list of site ids
mod scanner;
pub use scanner::*;

//! # roster-reports
//!
//! Report engine for roster. A report is bound to a borrowed batch of
//! employees and turns it into fixed column headers plus an ordered mapping
//! from group key to aggregate value.
//!
//! Reports are selected by name through the static [`registry`]. Adding a
//! report means implementing [`Report`] and adding one registry entry.

mod error;
mod performance;
pub mod registry;

pub use error::ReportError;
pub use performance::{PerformanceReport, average};
pub use registry::{ReportEntry, available_reports, entries, lookup};

use indexmap::IndexMap;

/// Ordered group key to aggregate value mapping produced by a report.
pub type ReportValues = IndexMap<String, f64>;

/// A computation over a bound batch of employees.
pub trait Report {
    /// Column labels for the group key and the aggregate value.
    fn headers(&self) -> [&'static str; 2];

    /// Aggregate values keyed by group, in first-seen group order.
    ///
    /// Calling this repeatedly returns the same result.
    fn compute(&self) -> ReportValues;
}

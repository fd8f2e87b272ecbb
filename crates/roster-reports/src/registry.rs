//! Name-keyed table of available reports.
//!
//! The table is a read-only `static` and is never modified at runtime.

use std::fmt;

use roster_core::entities::Employee;

use crate::{PerformanceReport, Report, ReportError};

/// Constructor binding a report to a batch of employees.
pub type BuildReport = for<'a> fn(&'a [Employee]) -> Box<dyn Report + 'a>;

/// One registered report.
pub struct ReportEntry {
    pub name: &'static str,
    pub description: &'static str,
    build: BuildReport,
}

impl fmt::Debug for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl ReportEntry {
    /// Bind this report to `employees`.
    #[must_use]
    pub fn build<'a>(&self, employees: &'a [Employee]) -> Box<dyn Report + 'a> {
        (self.build)(employees)
    }
}

static REPORTS: &[ReportEntry] = &[ReportEntry {
    name: "performance",
    description: "Mean performance score per position",
    build: performance,
}];

fn performance(employees: &[Employee]) -> Box<dyn Report + '_> {
    Box::new(PerformanceReport::new(employees))
}

/// All registered reports, in registration order.
#[must_use]
pub fn entries() -> &'static [ReportEntry] {
    REPORTS
}

/// Names of all registered reports, in registration order.
#[must_use]
pub fn available_reports() -> Vec<&'static str> {
    REPORTS.iter().map(|entry| entry.name).collect()
}

/// Find a report by exact name.
///
/// # Errors
///
/// Returns [`ReportError::UnknownReport`] listing the registered names.
pub fn lookup(name: &str) -> Result<&'static ReportEntry, ReportError> {
    let entry = REPORTS.iter().find(|entry| entry.name == name);
    tracing::debug!(report = name, found = entry.is_some(), "report lookup");
    entry.ok_or_else(|| ReportError::UnknownReport {
        name: name.to_string(),
        available: available_reports().join(", "),
    })
}

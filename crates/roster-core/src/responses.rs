//! Response types rendered by the `roster` binary.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of one report run: the column headers plus one value per group.
///
/// `rows` keeps the order in which the report produced its groups.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportResponse {
    pub report: String,
    pub headers: [String; 2],
    pub rows: IndexMap<String, f64>,
}

impl ReportResponse {
    #[must_use]
    pub fn new(report: impl Into<String>, headers: [&str; 2], rows: IndexMap<String, f64>) -> Self {
        Self {
            report: report.into(),
            headers: headers.map(str::to_owned),
            rows,
        }
    }

    /// Flatten the grouped values into `[key, value]` display rows.
    #[must_use]
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|(key, value)| vec![key.clone(), value.to_string()])
            .collect()
    }
}

//! Report engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// No report is registered under the requested name.
    #[error("unknown report '{name}'. Available reports: {available}")]
    UnknownReport { name: String, available: String },
}

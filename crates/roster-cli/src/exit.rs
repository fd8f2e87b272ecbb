//! Mapping of terminal errors to user-facing messages.

use roster_config::ConfigError;
use roster_ingest::IngestError;
use roster_reports::ReportError;

/// Category of a fatal error, shown as the message prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Failure {
    /// Bad argument or value: unknown report, bad config, undecodable input.
    InvalidArgument,
    /// A source could not be opened, read or converted.
    DataRead,
    Other,
}

impl Failure {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::DataRead => "failed to read data",
            Self::Other => "error",
        }
    }
}

/// Find the first roster error in the chain and classify it.
#[must_use]
pub fn classify(error: &anyhow::Error) -> Failure {
    for cause in error.chain() {
        if let Some(ingest) = cause.downcast_ref::<IngestError>() {
            return match ingest {
                IngestError::InvalidEncoding { .. } => Failure::InvalidArgument,
                IngestError::SourceUnavailable { .. }
                | IngestError::RowConversion { .. }
                | IngestError::SourceRead { .. } => Failure::DataRead,
            };
        }
        if cause.is::<ReportError>() || cause.is::<ConfigError>() {
            return Failure::InvalidArgument;
        }
    }
    Failure::Other
}

/// Render `error` with its category prefix and full context chain.
#[must_use]
pub fn describe(error: &anyhow::Error) -> String {
    format!("{}: {error:#}", classify(error).prefix())
}

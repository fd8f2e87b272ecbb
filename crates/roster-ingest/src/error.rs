//! Ingest error types.

use std::fmt;

use thiserror::Error;

/// Why a source could not be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    NotFound,
    AccessDenied,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("file not found"),
            Self::AccessDenied => f.write_str("access denied"),
        }
    }
}

/// Position of a row inside a source, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLocation {
    pub source_id: String,
    /// 1-based line number as reported by the CSV reader.
    pub line: u64,
}

impl fmt::Display for RowLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_id, self.line)
    }
}

/// Errors raised while turning sources into employees.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source could not be opened.
    #[error("{reason}: {source_id}")]
    SourceUnavailable {
        source_id: String,
        reason: Unavailable,
    },

    /// A row could not be coerced into an employee.
    #[error(
        "{}failed to convert row: field '{field}': {cause}",
        location_prefix(.location.as_ref())
    )]
    RowConversion {
        field: &'static str,
        cause: String,
        location: Option<RowLocation>,
    },

    /// The source contains bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in {source_id}: {cause}")]
    InvalidEncoding { source_id: String, cause: String },

    /// Any other failure while reading an opened source.
    #[error("failed to read {source_id}: {cause}")]
    SourceRead { source_id: String, cause: String },
}

impl IngestError {
    /// Attach a row location to a conversion error. Other variants pass through.
    #[must_use]
    pub fn at(self, location: RowLocation) -> Self {
        match self {
            Self::RowConversion { field, cause, .. } => Self::RowConversion {
                field,
                cause,
                location: Some(location),
            },
            other => other,
        }
    }
}

fn location_prefix(location: Option<&RowLocation>) -> String {
    location.map(|l| format!("{l}: ")).unwrap_or_default()
}

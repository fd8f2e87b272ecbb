//! Source-level parsing: opening files, reading headers, converting rows.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use roster_core::entities::Employee;

use crate::row::{RawRow, convert_row};
use crate::{IngestError, RowLocation, Unavailable};

/// Reader settings for delimited sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Parses employee sources with a fixed set of [`ParseOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser {
    options: ParseOptions,
}

impl RecordParser {
    #[must_use]
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse every source in order and concatenate the results.
    ///
    /// # Errors
    ///
    /// Fails with the first error raised by any source; earlier sources'
    /// employees are discarded.
    pub fn parse_sources<P: AsRef<Path>>(&self, sources: &[P]) -> Result<Vec<Employee>, IngestError> {
        let mut employees = Vec::new();
        for source in sources {
            employees.extend(self.parse_one_source(source)?);
        }
        tracing::debug!(
            sources = sources.len(),
            employees = employees.len(),
            "parsed all sources"
        );
        Ok(employees)
    }

    /// Open one file and parse it.
    ///
    /// # Errors
    ///
    /// [`IngestError::SourceUnavailable`] if the file is missing or not
    /// readable, otherwise whatever [`RecordParser::read_records`] returns.
    pub fn parse_one_source<P: AsRef<Path>>(&self, source: P) -> Result<Vec<Employee>, IngestError> {
        let path = source.as_ref();
        let source_id = path.display().to_string();
        let file = File::open(path).map_err(|e| open_error(&source_id, &e))?;
        self.read_records(&source_id, file)
    }

    /// Parse delimited text from any reader. The first record is the header.
    ///
    /// # Errors
    ///
    /// [`IngestError::RowConversion`] (with location) for a bad row,
    /// [`IngestError::InvalidEncoding`] for non-UTF-8 input and
    /// [`IngestError::SourceRead`] for other read failures.
    pub fn read_records<R: Read>(
        &self,
        source_id: &str,
        reader: R,
    ) -> Result<Vec<Employee>, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.options.delimiter)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| read_error(source_id, &e))?
            .clone();

        let mut employees = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| read_error(source_id, &e))?;
            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect();

            let employee = convert_row(&row).map_err(|e| {
                e.at(RowLocation {
                    source_id: source_id.to_string(),
                    line: record.position().map_or(0, csv::Position::line),
                })
            })?;
            employees.push(employee);
        }

        tracing::debug!(source = source_id, rows = employees.len(), "parsed source");
        Ok(employees)
    }
}

/// Parse every source with default options.
///
/// # Errors
///
/// See [`RecordParser::parse_sources`].
pub fn parse_sources<P: AsRef<Path>>(sources: &[P]) -> Result<Vec<Employee>, IngestError> {
    RecordParser::default().parse_sources(sources)
}

/// Parse one source with default options.
///
/// # Errors
///
/// See [`RecordParser::parse_one_source`].
pub fn parse_one_source<P: AsRef<Path>>(source: P) -> Result<Vec<Employee>, IngestError> {
    RecordParser::default().parse_one_source(source)
}

fn open_error(source_id: &str, error: &io::Error) -> IngestError {
    let reason = match error.kind() {
        io::ErrorKind::NotFound => Unavailable::NotFound,
        io::ErrorKind::PermissionDenied => Unavailable::AccessDenied,
        _ => {
            return IngestError::SourceRead {
                source_id: source_id.to_string(),
                cause: error.to_string(),
            };
        }
    };
    IngestError::SourceUnavailable {
        source_id: source_id.to_string(),
        reason,
    }
}

fn read_error(source_id: &str, error: &csv::Error) -> IngestError {
    match error.kind() {
        csv::ErrorKind::Utf8 { err, .. } => IngestError::InvalidEncoding {
            source_id: source_id.to_string(),
            cause: err.to_string(),
        },
        csv::ErrorKind::Io(io_error) => open_error(source_id, io_error),
        _ => IngestError::SourceRead {
            source_id: source_id.to_string(),
            cause: error.to_string(),
        },
    }
}

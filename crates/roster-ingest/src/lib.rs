//! # roster-ingest
//!
//! Record parser for roster. Reads one or more delimited sources whose first
//! row names the columns, converts every following row into an
//! [`Employee`](roster_core::entities::Employee), and stops at the first
//! failure. No partial results are ever returned.

mod error;
mod parser;
mod row;

pub use error::{IngestError, RowLocation, Unavailable};
pub use parser::{ParseOptions, RecordParser, parse_one_source, parse_sources};
pub use row::{RawRow, columns, convert_row, split_skills};

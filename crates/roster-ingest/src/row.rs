//! Conversion of one raw row into an [`Employee`].

use std::collections::HashMap;
use std::str::FromStr;

use roster_core::entities::Employee;

use crate::IngestError;

/// Column names a source header must provide.
pub mod columns {
    pub const NAME: &str = "name";
    pub const POSITION: &str = "position";
    pub const COMPLETED_TASKS: &str = "completed_tasks";
    pub const PERFORMANCE: &str = "performance";
    pub const SKILLS: &str = "skills";
    pub const TEAM: &str = "team";
    pub const EXPERIENCE_YEARS: &str = "experience_years";
}

/// One raw row keyed by header name.
pub type RawRow = HashMap<String, String>;

/// Convert a raw row into an employee, or fail without producing anything.
///
/// # Errors
///
/// Returns [`IngestError::RowConversion`] when a required column is absent or
/// a numeric field does not parse.
pub fn convert_row(row: &RawRow) -> Result<Employee, IngestError> {
    Ok(Employee::new(
        text(row, columns::NAME)?,
        text(row, columns::POSITION)?,
        number(row, columns::COMPLETED_TASKS)?,
        number(row, columns::PERFORMANCE)?,
        split_skills(text(row, columns::SKILLS)?),
        text(row, columns::TEAM)?,
        number(row, columns::EXPERIENCE_YEARS)?,
    ))
}

/// Split a skills cell into tokens.
///
/// The cell is split on whitespace and each token is stripped of leading and
/// trailing spaces and commas. Tokens that end up empty are kept, so
/// `"Go , Rust"` yields `["Go", "", "Rust"]`.
#[must_use]
pub fn split_skills(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches([' ', ',']).to_string())
        .collect()
}

fn text<'a>(row: &'a RawRow, field: &'static str) -> Result<&'a str, IngestError> {
    row.get(field)
        .map(String::as_str)
        .ok_or_else(|| IngestError::RowConversion {
            field,
            cause: String::from("column is missing"),
            location: None,
        })
}

fn number<T>(row: &RawRow, field: &'static str) -> Result<T, IngestError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = text(row, field)?;
    raw.trim().parse().map_err(|e| IngestError::RowConversion {
        field,
        cause: format!("{e} (value {raw:?})"),
        location: None,
    })
}

//! Settings for rendering report output.

use serde::{Deserialize, Serialize};

/// Output mode for rendered reports.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Raw,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Upper bound on rendered table width, in characters.
    #[serde(default)]
    pub max_width: Option<usize>,

    /// Render table headers in bold.
    #[serde(default)]
    pub color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.max_width, None);
        assert!(!config.color);
    }
}

//! Settings for reading employee sources.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_delimiter() -> String {
    String::from(",")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Field delimiter of the source files. Must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// The delimiter as the byte handed to the CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] unless the delimiter is exactly
    /// one ASCII character.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ConfigError::InvalidValue {
                field: "input.delimiter".into(),
                reason: format!(
                    "expected a single ASCII character, got {:?}",
                    self.delimiter
                ),
            }),
        }
    }
}

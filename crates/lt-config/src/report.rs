//! Report file settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_error_marker() -> String {
    "ERROR".to_string()
}

const fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Text written into all three derived cells when an issue lookup fails.
    #[serde(default = "default_error_marker")]
    pub error_marker: String,

    /// Field delimiter for both the input and the output file.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            error_marker: default_error_marker(),
            delimiter: default_delimiter(),
        }
    }
}

impl ReportConfig {
    /// The delimiter as the single byte the CSV codec expects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the delimiter is not ASCII.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "report.delimiter".into(),
                reason: format!("'{}' is not a single ASCII character", self.delimiter),
            })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-ASCII delimiter or an
    /// empty error marker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiter_byte()?;
        if self.error_marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.error_marker".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

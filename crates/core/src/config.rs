//! Clock configuration via TOML
//!
//! A clock can be described in a small TOML file instead of code:
//!
//! ```toml
//! digits = [24, 60, 60]
//! ```
//!
//! Each entry is resolved with [`DigitSpec::from_json`], so integers,
//! arrays of symbols and `{ start, stop, step }` tables are accepted.

use crate::clock::ClockRange;
use crate::error::{Error, Result};
use crate::spec::DigitSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "clockrange.toml";

/// Clock configuration loaded from TOML.
///
/// # Example
///
/// ```toml
/// # Digits, most significant first.
/// digits = [2, ["A", "B"], { start = 1, stop = 20, step = 2 }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    /// Raw digit entries, resolved lazily by [`digit_specs`](Self::digit_specs)
    #[serde(default)]
    pub digits: Vec<serde_json::Value>,
}

impl ClockConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# clockrange configuration
#
# Digits, most significant first:
#   24                               fixed base, counts 0..24
#   ["A", "B", 1.5]                  explicit symbols, rendered as listed
#   { start = 1, stop = 20, step = 2 }  range with stride (step defaults to 1)
digits = [24, 60, 60]
"#
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML for this schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Config` if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("{}: {}", path.display(), reason),
            },
            other => other,
        })?;
        info!(path = %path.display(), digits = config.digits.len(), "Loaded clock config");
        Ok(config)
    }

    /// Resolve every digit entry.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSpec` for the first entry that is not a valid digit.
    pub fn digit_specs(&self) -> Result<Vec<DigitSpec>> {
        self.digits.iter().map(DigitSpec::from_json).collect()
    }

    /// Build the configured clock.
    pub fn build(&self) -> Result<ClockRange> {
        ClockRange::new(self.digit_specs()?)
    }
}

//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override whatever is loaded here.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;
use prodcode_core::{CodeType, DetectorConfig};
use serde::{Deserialize, Serialize};

/// Output format variable: `text` or `json`.
pub const FORMAT_VAR: &str = "PRODCODE_FORMAT";

/// Default tracing filter, used when `RUST_LOG` is unset.
pub const LOG_VAR: &str = "PRODCODE_LOG";

/// Comma-separated formats the detector may answer with.
pub const FORMATS_VAR: &str = "PRODCODE_FORMATS";

/// Command-line flag that overrides [`FORMATS_VAR`].
pub const FORMATS_FLAG: &str = "--formats";

const DEFAULT_LOG_FILTER: &str = "warn";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(FORMAT_VAR.to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format
    pub output: OutputFormat,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,

    /// Formats enabled for `detect`
    pub formats: Vec<CodeType>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            formats: CodeType::ALL.to_vec(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = CliConfig {
            output: match lookup(FORMAT_VAR) {
                Some(value) => value.parse()?,
                None => OutputFormat::default(),
            },

            log_filter: lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),

            formats: match lookup(FORMATS_VAR) {
                Some(value) => parse_formats(&value)?,
                None => CodeType::ALL.to_vec(),
            },
        };

        Ok(config)
    }

    /// Applies command-line flags on top of the loaded values.
    ///
    /// An explicitly empty `--formats` list is rejected.
    pub fn with_overrides(
        mut self,
        output: Option<OutputFormat>,
        formats: Option<Vec<CodeType>>,
    ) -> Result<Self, ConfigError> {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(formats) = formats {
            if formats.is_empty() {
                return Err(ConfigError::InvalidValue(FORMATS_FLAG.to_string()));
            }
            self.formats = formats;
        }
        Ok(self)
    }

    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::only(self.formats.iter().copied())
    }
}

fn parse_formats(value: &str) -> Result<Vec<CodeType>, ConfigError> {
    let formats = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<CodeType>()
                .map_err(|_| ConfigError::InvalidValue(FORMATS_VAR.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if formats.is_empty() {
        return Err(ConfigError::InvalidValue(FORMATS_VAR.to_string()));
    }

    Ok(formats)
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

//! ELA Configuration Module
//!
//! Protocol constants and the decoding limits applied by the transaction codec.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Maximum script size in bytes
pub const MAX_SCRIPT_SIZE: usize = 65_535;
/// Default upper bound for var-int counts of attributes and programs
pub const DEFAULT_MAX_ATTRIBUTES: usize = 256;
/// Default upper bound for var-int counts of inputs and outputs
pub const DEFAULT_MAX_IO_ENTRIES: usize = 65_535;
/// Default upper bound for side-chain transaction hashes in a withdrawal
pub const DEFAULT_MAX_SIDE_CHAIN_HASHES: usize = 65_535;
/// Default upper bound for var-bytes carried inside a payload
pub const DEFAULT_MAX_PAYLOAD_DATA_SIZE: usize = 1_048_576; // 1MB
/// Default upper bound for var-strings (names, addresses, descriptions)
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1_024;

/// Errors raised while loading codec settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Limits and strictness applied to the transaction codec.
///
/// Every count and length prefix read from the wire is checked against one of
/// these bounds before anything is allocated for it. Encoding checks the same
/// bounds, so anything written under a set of settings decodes under them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    pub max_attributes: usize,
    pub max_inputs: usize,
    pub max_outputs: usize,
    pub max_programs: usize,
    /// Hashes listed by a withdraw-from-side-chain payload.
    pub max_side_chain_hashes: usize,
    pub max_script_size: usize,
    pub max_payload_data_size: usize,
    pub max_string_length: usize,
    /// Fail whole-buffer decodes that leave unread bytes behind.
    pub reject_trailing_bytes: bool,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
            max_inputs: DEFAULT_MAX_IO_ENTRIES,
            max_outputs: DEFAULT_MAX_IO_ENTRIES,
            max_programs: DEFAULT_MAX_ATTRIBUTES,
            max_side_chain_hashes: DEFAULT_MAX_SIDE_CHAIN_HASHES,
            max_script_size: MAX_SCRIPT_SIZE,
            max_payload_data_size: DEFAULT_MAX_PAYLOAD_DATA_SIZE,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            reject_trailing_bytes: false,
        }
    }
}

impl CodecSettings {
    /// Settings that reject trailing bytes after a complete transaction.
    pub fn strict() -> Self {
        Self {
            reject_trailing_bytes: true,
            ..Self::default()
        }
    }

    /// Parses settings from TOML; absent keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// A script limit below a standard redeem script would reject every
    /// signed transaction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_script_size < 35 {
            return Err(ConfigError::Invalid {
                field: "max_script_size",
                reason: format!("{} is smaller than a standard redeem script", self.max_script_size),
            });
        }
        Ok(())
    }
}

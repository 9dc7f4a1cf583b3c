//! compression/config.rs
//! Exporter-facing compression section.

use serde::{Deserialize, Serialize};

use crate::compression::constants::DEFAULT_FORMAT;
use crate::compression::registry::{new_compressor, Compressor};
use crate::compression::types::CompressionError;

/// Compression settings read once at exporter startup.
///
/// The format stays a raw string so an unknown value is reported by the
/// factory with the offending name rather than by the deserializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self { format: default_format() }
    }
}

impl CompressionConfig {
    pub fn new(format: impl Into<String>) -> Self {
        Self { format: format.into() }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CompressionError> {
        serde_json::from_str(raw).map_err(|e| CompressionError::Config(e.to_string()))
    }

    /// Validate the format and return the shared compression operation.
    pub fn build(&self) -> Result<Compressor, CompressionError> {
        new_compressor(&self.format)
    }
}

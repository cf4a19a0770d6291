use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codec::ByteOrder;

/// Settings the enclosing reader/writer passes to the payload helpers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    /// Byte order of element payloads, normally taken from the file header.
    pub byte_order: ByteOrder,

    /// Reject class tags that do not match the element kind being built.
    pub validate_class: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Big,
            validate_class: true,
        }
    }
}

impl CodecConfig {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse codec configuration")
    }
}

/// Load a [`CodecConfig`] from a JSON file. Missing keys take their defaults.
pub fn load_codec_config<P: AsRef<Path>>(path: P) -> Result<CodecConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read codec config: {}", path.display()))?;
    let config = CodecConfig::from_json_str(&contents)
        .with_context(|| format!("Invalid codec config: {}", path.display()))?;
    log::debug!("loaded codec config from {}: {:?}", path.display(), config);
    Ok(config)
}

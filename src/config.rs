//! Generator configuration
//!
//! A JSON file listing the allowlist and output options:
//!
//! ```json
//! {
//!   "whitelist": ["0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"],
//!   "output": "script/merkle-output.json",
//!   "hash": "keccak256"
//! }
//! ```
//!
//! The CLI falls back to `~/.config/allowlist-merkle/config.json` when no
//! addresses or config file are given.

use crate::hasher::HashAlgorithm;
use crate::model::Allowlist;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "merkle-output.json";

/// Configuration for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Addresses in commitment order
    pub whitelist: Vec<String>,
    /// Where to write the record; relative paths resolve against the config file
    pub output: Option<PathBuf>,
    /// Hash function for leaves and nodes
    pub hash: HashAlgorithm,
}

impl Config {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        if let (Some(output), Some(dir)) = (&config.output, path.parent()) {
            if output.is_relative() {
                config.output = Some(dir.join(output));
            }
        }
        Ok(config)
    }

    /// Load the user-level config if it exists
    pub fn load_user() -> Result<Option<Self>> {
        match Self::user_path() {
            Some(path) if path.exists() => Self::load(path).map(Some),
            _ => Ok(None),
        }
    }

    /// `<config_dir>/allowlist-merkle/config.json`
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("allowlist-merkle").join("config.json"))
    }

    /// Parse the configured addresses
    pub fn allowlist(&self) -> Result<Allowlist> {
        Allowlist::parse(&self.whitelist)
    }

    /// Output path, or [`DEFAULT_OUTPUT`] in the working directory
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

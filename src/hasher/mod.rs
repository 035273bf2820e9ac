//! Pluggable hash functions

mod blake;
mod keccak;
mod traits;

pub use blake::Blake3Hasher;
pub use keccak::Keccak256Hasher;
pub use traits::Hasher;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Selectable hash algorithm, for configuration files and the CLI
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Keccak256,
    Blake3,
}

impl HashAlgorithm {
    /// Instantiate the hasher for this algorithm
    pub fn hasher(&self) -> Arc<dyn Hasher> {
        match self {
            HashAlgorithm::Keccak256 => Arc::new(Keccak256Hasher),
            HashAlgorithm::Blake3 => Arc::new(Blake3Hasher),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Keccak256 => write!(f, "keccak256"),
            HashAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

//! Error types for allowlist_merkle

use crate::model::Hash;
use thiserror::Error;

/// Result type alias for allowlist_merkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or checking a commitment
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Cannot build a Merkle tree from an empty address list")]
    EmptyInput,

    #[error("Leaf not found in tree: {0}")]
    LeafNotFound(Hash),

    #[error("Leaf index {index} is out of range for tree with {leaves} leaves")]
    LeafIndexOutOfRange { index: usize, leaves: usize },

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

//! Fixed-size digest type shared by leaves, nodes and roots

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length in bytes of every digest in the tree
pub const HASH_LEN: usize = 32;

/// A 32-byte digest produced by a [`Hasher`](crate::Hasher)
///
/// `Ord` is plain lexicographic byte order, which is the order used by the
/// sorted-pair combine rule.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; HASH_LEN]);

impl Hash {
    /// The zero hash
    pub const ZERO: Hash = Hash([0u8; HASH_LEN]);

    /// Create a hash from raw bytes
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Hash(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Convert to a `0x`-prefixed lowercase hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without the `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut arr = [0u8; HASH_LEN];
        hex::decode_to_slice(digits, &mut arr)?;
        Ok(Hash(arr))
    }

    /// Get a short prefix for display (first 7 hex digits, like git)
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])[..7].to_string()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.short())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

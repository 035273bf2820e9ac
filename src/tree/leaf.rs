//! Leaf hashing

use crate::hasher::Hasher;
use crate::model::{Address, Hash};
use crate::Result;

/// Hash an address into its leaf: the digest of its 20 raw bytes
pub fn leaf_hash(hasher: &dyn Hasher, address: &Address) -> Hash {
    hasher.hash(address.as_bytes())
}

/// Parse an address string and hash it into a leaf
pub fn leaf_hash_str(hasher: &dyn Hasher, address: &str) -> Result<Hash> {
    Ok(leaf_hash(hasher, &Address::parse(address)?))
}

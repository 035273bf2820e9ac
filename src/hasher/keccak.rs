//! Keccak-256, the hash used by Solidity's `keccak256`

use super::Hasher;
use crate::model::Hash;
use sha3::{Digest, Keccak256};

/// Keccak-256 (the original Keccak padding, not NIST SHA3-256)
///
/// Roots built with this hasher verify against OpenZeppelin-style
/// `MerkleProof.verify` contracts, which use sorted-pair Keccak-256.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> Hash {
        Hash::from_bytes(Keccak256::digest(data).into())
    }

    fn hash_parts(&self, parts: &[&[u8]]) -> Hash {
        let mut hasher = Keccak256::new();
        for part in parts {
            hasher.update(part);
        }
        Hash::from_bytes(hasher.finalize().into())
    }

    fn name(&self) -> &str {
        "keccak256"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty_vector() {
        let h = Keccak256Hasher.hash(b"");
        assert_eq!(
            h.to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_abc_vector() {
        let h = Keccak256Hasher.hash(b"abc");
        assert_eq!(
            h.to_hex(),
            "0x4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn test_keccak_parts_match_concatenation() {
        let h = Keccak256Hasher;
        assert_eq!(h.hash_parts(&[b"a", b"bc"]), h.hash(b"abc"));
    }
}

//! BLAKE3 hasher

use super::Hasher;
use crate::model::Hash;

/// BLAKE3 with the default (unkeyed) mode
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Hasher;

impl Hasher for Blake3Hasher {
    fn hash(&self, data: &[u8]) -> Hash {
        Hash::from_bytes(*blake3::hash(data).as_bytes())
    }

    fn hash_parts(&self, parts: &[&[u8]]) -> Hash {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        Hash::from_bytes(*hasher.finalize().as_bytes())
    }

    fn name(&self) -> &str {
        "blake3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake3_empty_vector() {
        assert_eq!(
            Blake3Hasher.hash(b"").to_hex(),
            "0xaf1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_blake3_parts_match_concatenation() {
        let h = Blake3Hasher;
        assert_eq!(h.hash_parts(&[b"hello ", b"world"]), h.hash(b"hello world"));
    }
}

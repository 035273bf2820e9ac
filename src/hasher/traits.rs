//! Hasher trait definition

use crate::model::Hash;

/// A one-way hash function producing 32-byte digests
///
/// Every digest in a tree (leaves, internal nodes, root) comes from the same
/// `Hasher`. Implementations can use:
/// - Keccak-256, matching Solidity's `keccak256` for on-chain verification
/// - BLAKE3
/// - Fixed test doubles, so tree logic can be checked independently
pub trait Hasher: Send + Sync {
    /// Hash a single byte string
    fn hash(&self, data: &[u8]) -> Hash;

    /// Hash the concatenation of several byte strings.
    /// Default implementation copies the parts into one buffer.
    fn hash_parts(&self, parts: &[&[u8]]) -> Hash {
        self.hash(&parts.concat())
    }

    /// Combine two child digests into their parent: `hash(min(a, b) ++ max(a, b))`.
    ///
    /// The result does not depend on argument order. Tree construction and
    /// [`verify_proof`](crate::tree::verify_proof) both rely on this rule;
    /// changing it breaks every proof already handed out.
    fn hash_pair(&self, a: &Hash, b: &Hash) -> Hash {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.hash_parts(&[lo.as_bytes(), hi.as_bytes()])
    }

    /// Get the algorithm name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sums bytes into the first digest byte; weak, but easy to reason about.
    struct SumHasher;

    impl Hasher for SumHasher {
        fn hash(&self, data: &[u8]) -> Hash {
            let mut out = [0u8; 32];
            out[0] = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
            out[1] = data.len() as u8;
            Hash::from_bytes(out)
        }

        fn name(&self) -> &str {
            "sum"
        }
    }

    #[test]
    fn test_hash_parts_default_concatenates() {
        let h = SumHasher;
        assert_eq!(h.hash_parts(&[b"ab", b"c"]), h.hash(b"abc"));
    }

    #[test]
    fn test_hash_pair_is_symmetric() {
        let h = SumHasher;
        let a = Hash::from_bytes([1u8; 32]);
        let b = Hash::from_bytes([2u8; 32]);
        assert_eq!(h.hash_pair(&a, &b), h.hash_pair(&b, &a));
    }

    #[test]
    fn test_hash_pair_sorts_before_hashing() {
        let h = SumHasher;
        let a = Hash::from_bytes([1u8; 32]);
        let b = Hash::from_bytes([2u8; 32]);
        let expected = h.hash_parts(&[a.as_bytes(), b.as_bytes()]);
        assert_eq!(h.hash_pair(&b, &a), expected);
    }
}

//! Membership proofs and their verification

use crate::hasher::Hasher;
use crate::model::Hash;
use serde::{Deserialize, Serialize};

/// Sibling digests from a leaf up to the root
///
/// The first sibling is the leaf's immediate partner, the last one is the
/// child of the root on the other side. Levels where the path node was
/// promoted without a partner contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    siblings: Vec<Hash>,
}

impl Proof {
    pub fn new(siblings: Vec<Hash>) -> Self {
        Proof { siblings }
    }

    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Siblings as `0x`-prefixed hex strings
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings.iter().map(Hash::to_hex).collect()
    }

    /// Fold `leaf` with every sibling using the sorted-pair rule
    pub fn compute_root(&self, hasher: &dyn Hasher, leaf: &Hash) -> Hash {
        compute_root(hasher, leaf, &self.siblings)
    }

    /// Check that this proof links `leaf` to `root`
    pub fn verify(&self, hasher: &dyn Hasher, leaf: &Hash, root: &Hash) -> bool {
        verify_proof(hasher, leaf, &self.siblings, root)
    }
}

impl From<Vec<Hash>> for Proof {
    fn from(siblings: Vec<Hash>) -> Self {
        Proof { siblings }
    }
}

fn compute_root(hasher: &dyn Hasher, leaf: &Hash, siblings: &[Hash]) -> Hash {
    siblings
        .iter()
        .fold(*leaf, |acc, sibling| hasher.hash_pair(&acc, sibling))
}

/// Recompute the root from a leaf and its siblings and compare.
///
/// Must stay in lockstep with [`MerkleTree::build`](super::MerkleTree::build):
/// the pair rule is `hasher.hash_pair` and promoted nodes have no sibling.
pub fn verify_proof(hasher: &dyn Hasher, leaf: &Hash, siblings: &[Hash], root: &Hash) -> bool {
    compute_root(hasher, leaf, siblings) == *root
}

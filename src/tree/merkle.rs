//! Merkle tree construction and proof extraction

use super::Proof;
use crate::hasher::Hasher;
use crate::model::Hash;
use crate::{Error, Result};
use tracing::debug;

/// An immutable binary Merkle tree over an ordered list of leaves
///
/// Stored level by level: `levels[0]` holds the leaves in input order and
/// the last level holds only the root.
///
/// Two rules shape the tree, and [`verify_proof`](super::verify_proof)
/// depends on both:
/// - adjacent nodes are combined with [`Hasher::hash_pair`], which sorts
///   the two digests before hashing;
/// - on a level with an odd count the last node moves up unchanged. It is
///   never paired with itself.
///
/// Because pairing follows input order, permuting the leaves can change the
/// root even though each pair hash is order independent. This matches the
/// `sortPairs` trees expected by on-chain verifiers, so input order is part
/// of the commitment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree from leaves in the given order
    pub fn build(hasher: &dyn Hasher, leaves: Vec<Hash>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<Hash> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hasher.hash_pair(left, right),
                    [odd] => *odd,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            debug!(
                level = levels.len(),
                nodes = next.len(),
                "built merkle level"
            );
            levels.push(next);
        }

        Ok(MerkleTree { levels })
    }

    /// The root digest
    pub fn root(&self) -> Hash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of levels above the leaves; 0 for a single leaf
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    /// Index of the first leaf equal to `leaf`
    pub fn position(&self, leaf: &Hash) -> Option<usize> {
        self.leaves().iter().position(|l| l == leaf)
    }

    /// Proof for the first occurrence of `leaf`
    pub fn proof(&self, leaf: &Hash) -> Result<Proof> {
        let index = self.position(leaf).ok_or(Error::LeafNotFound(*leaf))?;
        self.proof_at(index)
    }

    /// Proof for the leaf at `index`, bottom-up
    pub fn proof_at(&self, index: usize) -> Result<Proof> {
        if index >= self.leaf_count() {
            return Err(Error::LeafIndexOutOfRange {
                index,
                leaves: self.leaf_count(),
            });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut index = index;
        for level in &self.levels[..self.depth()] {
            let sibling = index ^ 1;
            // A promoted node has no partner on this level.
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            index /= 2;
        }

        Ok(Proof::new(siblings))
    }
}

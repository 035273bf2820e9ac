//! Sorted-pair Merkle tree over address leaves
//!
//! - Leaves are the hash of each address's raw bytes
//! - Parents hash their two children in sorted byte order
//! - An unpaired node at the end of a level moves up unchanged
//! - Proofs list siblings bottom-up and verify by folding with the same pair rule

mod leaf;
mod merkle;
mod proof;

pub use leaf::{leaf_hash, leaf_hash_str};
pub use merkle::MerkleTree;
pub use proof::{verify_proof, Proof};

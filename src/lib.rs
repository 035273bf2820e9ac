//! # allowlist_merkle
//!
//! Merkle roots and membership proofs for on-chain address allowlists.
//!
//! An ordered list of addresses is hashed into leaves, combined into a
//! sorted-pair binary Merkle tree, and exported as a JSON record holding the
//! root and one proof per address. Contracts store the root and check claims
//! with the standard sorted-pair verifier.
//!
//! ## Core Concepts
//!
//! - **Leaves**: the hash of each address's 20 raw bytes
//! - **Pair rule**: parents hash their children in sorted byte order
//! - **Promotion**: an unpaired node at the end of a level moves up unchanged
//! - **Proofs**: sibling digests from leaf to root
//!
//! ## Example
//!
//! ```
//! use allowlist_merkle::{Address, Allowlist, Commitment};
//!
//! let allowlist = Allowlist::parse(["0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"])?;
//! let commitment = Commitment::build(allowlist)?;
//! let record = commitment.to_record()?;
//!
//! let address = Address::parse("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf")?;
//! assert!(commitment.verify(&address, &commitment.proof(&address)?));
//! assert_eq!(record.merkle_root, commitment.root());
//! # Ok::<(), allowlist_merkle::Error>(())
//! ```

pub mod config;
pub mod hasher;
pub mod logging;
pub mod model;
pub mod record;
pub mod sink;
pub mod source;
pub mod tree;

mod commitment;
mod error;

pub use commitment::Commitment;
pub use config::Config;
pub use error::{Error, Result};
pub use hasher::{Blake3Hasher, HashAlgorithm, Hasher, Keccak256Hasher};
pub use model::{Address, Allowlist, AllowlistEntry, Hash};
pub use record::{CommitmentRecord, ProofMap};
pub use tree::{leaf_hash, verify_proof, MerkleTree, Proof};

//! The serializable commitment record handed to the output sink

use crate::hasher::Hasher;
use crate::model::{Address, Hash};
use crate::tree::{leaf_hash, Proof};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Address string → proof, in whitelist order
///
/// Serializes as a JSON object. Re-inserting a key replaces its proof in place.
pub type ProofMap = IndexMap<String, Proof>;

/// Root, address list and per-address proofs, in the JSON layout
/// consumed by deployment scripts:
///
/// ```json
/// {
///   "merkleRoot": "0x…",
///   "whitelist": ["0x…"],
///   "proofs": { "0x…": ["0x…"] }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentRecord {
    pub merkle_root: Hash,
    pub whitelist: Vec<String>,
    pub proofs: ProofMap,
}

/// The record as written on disk, before digests are decoded
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    merkle_root: String,
    whitelist: Vec<String>,
    proofs: IndexMap<String, Vec<String>>,
}

fn parse_digest(s: &str) -> Result<Hash> {
    Hash::from_hex(s).map_err(|e| Error::InvalidHash(format!("{s:?}: {e}")))
}

impl CommitmentRecord {
    /// Parse a record from JSON.
    ///
    /// Malformed documents fail with [`Error::Json`]; well-formed documents
    /// holding a digest that is not 32 bytes of hex fail with
    /// [`Error::InvalidHash`].
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawRecord = serde_json::from_str(content)?;
        let proofs = raw
            .proofs
            .into_iter()
            .map(|(address, siblings)| {
                let siblings = siblings
                    .iter()
                    .map(|s| parse_digest(s))
                    .collect::<Result<Vec<_>>>()?;
                Ok((address, Proof::new(siblings)))
            })
            .collect::<Result<ProofMap>>()?;

        Ok(CommitmentRecord {
            merkle_root: parse_digest(&raw.merkle_root)?,
            whitelist: raw.whitelist,
            proofs,
        })
    }

    /// Look up the proof for an address string.
    ///
    /// Tries the exact string first, then any key naming the same address
    /// bytes in a different letter case.
    pub fn proof_for(&self, address: &str) -> Option<&Proof> {
        if let Some(proof) = self.proofs.get(address) {
            return Some(proof);
        }
        let wanted = Address::parse(address).ok()?;
        self.proofs
            .iter()
            .find(|(key, _)| Address::parse(key).map_or(false, |a| a == wanted))
            .map(|(_, proof)| proof)
    }

    /// Check the stored proof for `address` against the stored root
    pub fn verify_address(&self, hasher: &dyn Hasher, address: &str) -> Result<bool> {
        let leaf = leaf_hash(hasher, &Address::parse(address)?);
        let proof = self.proof_for(address).ok_or(Error::LeafNotFound(leaf))?;
        Ok(proof.verify(hasher, &leaf, &self.merkle_root))
    }
}

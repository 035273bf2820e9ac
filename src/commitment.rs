//! High-level commitment API
//!
//! Ties an [`Allowlist`], a [`Hasher`] and a [`MerkleTree`] together and
//! produces the [`CommitmentRecord`] written by the CLI.

use crate::hasher::{HashAlgorithm, Hasher};
use crate::model::{Address, Allowlist, Hash};
use crate::record::{CommitmentRecord, ProofMap};
use crate::tree::{leaf_hash, MerkleTree, Proof};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// A Merkle commitment over an allowlist
///
/// Built once and never mutated.
pub struct Commitment {
    allowlist: Allowlist,
    tree: MerkleTree,
    hasher: Arc<dyn Hasher>,
}

impl Commitment {
    /// Build a commitment with the default hasher (Keccak-256)
    pub fn build(allowlist: Allowlist) -> Result<Self> {
        Self::build_with(allowlist, HashAlgorithm::default().hasher())
    }

    /// Build a commitment with the given hasher
    pub fn build_with(allowlist: Allowlist, hasher: Arc<dyn Hasher>) -> Result<Self> {
        let leaves: Vec<Hash> = allowlist
            .entries()
            .iter()
            .map(|entry| leaf_hash(hasher.as_ref(), &entry.address))
            .collect();

        let tree = MerkleTree::build(hasher.as_ref(), leaves)?;
        info!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            hasher = hasher.name(),
            root = %tree.root(),
            "built merkle commitment"
        );

        Ok(Commitment {
            allowlist,
            tree,
            hasher,
        })
    }

    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    pub fn allowlist(&self) -> &Allowlist {
        &self.allowlist
    }

    pub fn hasher(&self) -> &dyn Hasher {
        self.hasher.as_ref()
    }

    /// Leaf digest of an address under this commitment's hasher
    pub fn leaf(&self, address: &Address) -> Hash {
        leaf_hash(self.hasher.as_ref(), address)
    }

    /// Proof for an address; duplicates resolve to the first occurrence
    pub fn proof(&self, address: &Address) -> Result<Proof> {
        self.tree.proof(&self.leaf(address))
    }

    /// Check a proof for `address` against this commitment's root
    pub fn verify(&self, address: &Address, proof: &Proof) -> bool {
        proof.verify(self.hasher.as_ref(), &self.leaf(address), &self.root())
    }

    /// Produce the output record.
    ///
    /// Every entry gets a proof keyed by its address string as given.
    /// The first failing proof aborts the whole record.
    pub fn to_record(&self) -> Result<CommitmentRecord> {
        let mut proofs = ProofMap::new();
        for entry in self.allowlist.entries() {
            let proof = self.proof(&entry.address)?;
            debug!(address = %entry.raw, siblings = proof.len(), "extracted proof");
            proofs.insert(entry.raw.clone(), proof);
        }

        Ok(CommitmentRecord {
            merkle_root: self.root(),
            whitelist: self.allowlist.raw_addresses(),
            proofs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Keccak256Hasher;
    use crate::tree::verify_proof;
    use crate::Error;

    const A: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA0001";
    const B: &str = "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB0002";
    const C: &str = "0xcccccccccccccccccccccccccccccccccccc0003";
    const D: &str = "0xdddddddddddddddddddddddddddddddddddd0004";

    fn commit(addresses: &[&str]) -> Commitment {
        Commitment::build(Allowlist::parse(addresses).unwrap()).unwrap()
    }

    fn leaf(address: &str) -> Hash {
        leaf_hash(&Keccak256Hasher, &Address::parse(address).unwrap())
    }

    #[test]
    fn test_empty_allowlist() {
        let result = Commitment::build(Allowlist::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_address_root_is_leaf() {
        let c = commit(&[A]);
        assert_eq!(c.root(), leaf(A));
        assert!(c.proof(&Address::parse(A).unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_two_address_scenario() {
        let c = commit(&[A, B]);
        let (la, lb) = (leaf(A), leaf(B));

        assert_eq!(c.tree().depth(), 1);
        assert_eq!(c.root(), Keccak256Hasher.hash_pair(&la, &lb));

        let pa = c.proof(&Address::parse(A).unwrap()).unwrap();
        let pb = c.proof(&Address::parse(B).unwrap()).unwrap();
        assert_eq!(pa.siblings(), &[lb]);
        assert_eq!(pb.siblings(), &[la]);
        assert!(verify_proof(&Keccak256Hasher, &la, pa.siblings(), &c.root()));
        assert!(verify_proof(&Keccak256Hasher, &lb, pb.siblings(), &c.root()));
    }

    #[test]
    fn test_round_trip_every_address() {
        let c = commit(&[A, B, C, D, A]);
        let record = c.to_record().unwrap();
        for address in [A, B, C, D] {
            assert!(record.verify_address(&Keccak256Hasher, address).unwrap());
            let parsed = Address::parse(address).unwrap();
            assert!(c.verify(&parsed, &c.proof(&parsed).unwrap()));
        }
    }

    #[test]
    fn test_deterministic() {
        let r1 = commit(&[A, B, C]).to_record().unwrap();
        let r2 = commit(&[A, B, C]).to_record().unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_order_sensitivity_is_stable() {
        let abc = commit(&[A, B, C]).root();
        let cab = commit(&[C, A, B]).root();
        assert_ne!(abc, cab);
        assert_eq!(cab, commit(&[C, A, B]).root());
        // Swapping the members of a pair does not move the root.
        assert_eq!(abc, commit(&[B, A, C]).root());
    }

    #[test]
    fn test_foreign_address() {
        let c = commit(&[A, B]);
        let foreign = Address::parse(C).unwrap();
        assert!(matches!(c.proof(&foreign), Err(Error::LeafNotFound(_))));

        let forged = c.proof(&Address::parse(A).unwrap()).unwrap();
        assert!(!c.verify(&foreign, &forged));
    }

    #[test]
    fn test_record_keeps_given_casing() {
        let c = commit(&[A, B]);
        let record = c.to_record().unwrap();

        assert_eq!(record.whitelist, vec![A.to_string(), B.to_string()]);
        assert!(record.proofs.get(A).is_some());
        assert!(record.proofs.get(&A.to_lowercase()).is_none());
        assert_eq!(record.merkle_root, c.root());
    }

    #[test]
    fn test_duplicate_address_single_proof_entry() {
        let record = commit(&[A, B, A]).to_record().unwrap();
        assert_eq!(record.whitelist.len(), 3);
        assert_eq!(record.proofs.len(), 2);
    }

    #[test]
    fn test_custom_hasher_injected() {
        let allowlist = Allowlist::parse([A, B]).unwrap();
        let keccak = Commitment::build(allowlist.clone()).unwrap();
        let blake = Commitment::build_with(allowlist, HashAlgorithm::Blake3.hasher()).unwrap();
        assert_ne!(keccak.root(), blake.root());
        assert_eq!(blake.hasher().name(), "blake3");
    }

    // Private keys 1, 2 and 3 (Foundry's `vm.addr(1..=3)`).
    const KEY1: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";
    const KEY2: &str = "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF";
    const KEY3: &str = "0x6813Eb9362372EEF6200f3b1dbC3f819671cBA69";

    fn hash(hex: &str) -> Hash {
        Hash::from_hex(hex).unwrap()
    }

    #[test]
    fn test_known_single_address_root() {
        let c = commit(&[KEY1]);
        let expected = hash("0x3322f33946a3c503c916c8fc29768a547f01fa665e1eb22f9f66cf7e5a262012");
        assert_eq!(leaf(KEY1), expected);
        assert_eq!(c.root(), expected);
        assert!(c.proof(&Address::parse(KEY1).unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_known_two_address_root() {
        let c = commit(&[KEY1, KEY2]);
        assert_eq!(
            c.root(),
            hash("0x3dd73fb4bffdc562cf570f864739747e2ab5d46ab397c4466da14e0e06b57d56")
        );
        assert_eq!(
            c.proof(&Address::parse(KEY1).unwrap()).unwrap().siblings(),
            &[hash("0x94a6fc29a44456b36232638a7042431c9c91b910df1c52187179085fac1560e9")]
        );
        assert_eq!(
            c.proof(&Address::parse(KEY2).unwrap()).unwrap().siblings(),
            &[hash("0x3322f33946a3c503c916c8fc29768a547f01fa665e1eb22f9f66cf7e5a262012")]
        );
    }

    #[test]
    fn test_known_three_address_roots() {
        assert_eq!(
            commit(&[KEY1, KEY2, KEY3]).root(),
            hash("0xf427e2516c2b28668cec27b1c40c626fe3e391f5c632d8da25d5cd391d19fae1")
        );
        assert_eq!(
            commit(&[KEY3, KEY1, KEY2]).root(),
            hash("0x06c5ff6fb53395b80ecccbc2c57826a9c3ddaa45cb31efd5fb247656f0ec3c6d")
        );
    }
}

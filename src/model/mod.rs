//! Core data model types for allowlist_merkle

mod address;
mod hash;

pub use address::{Address, Allowlist, AllowlistEntry, ADDRESS_LEN};
pub use hash::{Hash, HASH_LEN};

//! Addresses and the ordered allowlist built from them

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of an address
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address
///
/// Equality is by byte value, so `0xABCD...` and `0xabcd...` are the same
/// address. The string form used to create it is kept separately by
/// [`AllowlistEntry`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Create an address from raw bytes
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Parse a `0x`-prefixed, 40 hex digit address in any letter case.
    ///
    /// The prefix is mandatory: leaves are the hash of the decoded bytes,
    /// and an unprefixed string would otherwise be ambiguous with plain text.
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| Error::InvalidAddress(format!("{s:?}: missing 0x prefix")))?;
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(Error::InvalidAddress(format!(
                "{s:?}: expected {} hex chars, got {}",
                ADDRESS_LEN * 2,
                digits.len()
            )));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| Error::InvalidAddress(format!("{s:?}: {e}")))?;
        Ok(Address(bytes))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex form
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

/// One allowlist entry: the address as it was written, plus its bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowlistEntry {
    pub raw: String,
    pub address: Address,
}

/// An ordered list of addresses
///
/// Order matters: it decides which leaves are paired in the tree, and
/// duplicates are kept as duplicate leaves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Allowlist {
    entries: Vec<AllowlistEntry>,
}

impl Allowlist {
    /// Parse every address, failing on the first malformed one
    pub fn parse<I, S>(addresses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = addresses
            .into_iter()
            .map(|s| {
                let raw = s.as_ref();
                Ok(AllowlistEntry {
                    raw: raw.to_string(),
                    address: Address::parse(raw)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Allowlist { entries })
    }

    pub fn entries(&self) -> &[AllowlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Address strings exactly as given, in order
    pub fn raw_addresses(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.raw.clone()).collect()
    }

    /// Check membership by byte value
    pub fn contains(&self, address: &Address) -> bool {
        self.entries.iter().any(|e| &e.address == address)
    }
}

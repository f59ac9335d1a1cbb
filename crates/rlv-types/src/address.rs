use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

const KEY_LEN: usize = 20;
const CHECKSUM_LEN: usize = 4;
const ENCODED_LEN: usize = KEY_LEN + 1 + CHECKSUM_LEN;

/// Ledger address: a version byte and a 20-byte public key hash.
///
/// The text form is base58 of `key || version || checksum`, where the
/// checksum is the first four bytes of the BLAKE3 hash of `key || version`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    pub version: u8,
    pub key: [u8; KEY_LEN],
}

impl Address {
    pub const fn new(version: u8, key: [u8; KEY_LEN]) -> Self {
        Self { version, key }
    }

    /// Derive a version-0 address from public key bytes.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let digest = blake3::hash(public_key);
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&digest.as_bytes()[..KEY_LEN]);
        Self { version: 0, key }
    }

    fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.key);
        hasher.update(&[self.version]);
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&hasher.finalize().as_bytes()[..CHECKSUM_LEN]);
        out
    }

    /// Base58 text form.
    pub fn to_base58(&self) -> String {
        let mut raw = Vec::with_capacity(ENCODED_LEN);
        raw.extend_from_slice(&self.key);
        raw.push(self.version);
        raw.extend_from_slice(&self.checksum());
        bs58::encode(raw).into_string()
    }

    /// Parse the base58 text form, verifying length and checksum.
    pub fn from_base58(s: &str) -> Result<Self, TypeError> {
        let raw = bs58::decode(s)
            .into_vec()
            .map_err(|e| TypeError::InvalidBase58(e.to_string()))?;
        if raw.len() != ENCODED_LEN {
            return Err(TypeError::InvalidLength {
                expected: ENCODED_LEN,
                actual: raw.len(),
            });
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&raw[..KEY_LEN]);
        let addr = Self {
            version: raw[KEY_LEN],
            key,
        };
        if raw[KEY_LEN + 1..] != addr.checksum() {
            return Err(TypeError::ChecksumMismatch);
        }
        Ok(addr)
    }
}

impl FromStr for Address {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

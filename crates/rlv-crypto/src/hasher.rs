use rlv_types::Hash256;

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag that is prepended to every hash
/// computation, so a transaction and an output body with identical encoded
/// bytes never share an id.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for full signed transactions (the transaction id).
    pub const TRANSACTION: Self = Self {
        domain: "rlv-txn-v1",
    };
    /// Hasher for the signable transaction body (inputs and outputs).
    pub const TRANSACTION_INNER: Self = Self {
        domain: "rlv-txn-inner-v1",
    };
    /// Hasher for unspent-output bodies.
    pub const UX_BODY: Self = Self {
        domain: "rlv-uxbody-v1",
    };
    /// Hasher for block headers.
    pub const BLOCK_HEADER: Self = Self {
        domain: "rlv-header-v1",
    };
    /// Hasher for interior Merkle nodes (left child then right child).
    pub const MERKLE_NODE: Self = Self {
        domain: "rlv-merkle-v1",
    };

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> Hash256 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Hash256::from_bytes(*hasher.finalize().as_bytes())
    }

    /// Hash the canonical `bincode` encoding of a value.
    pub fn hash_encoded<T: serde::Serialize>(&self, value: &T) -> Result<Hash256, HasherError> {
        let data =
            bincode::serialize(value).map_err(|e| HasherError::Serialization(e.to_string()))?;
        Ok(self.hash(&data))
    }
}

/// Errors from hashing operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let data = b"hello world";
        assert_eq!(
            ContentHasher::TRANSACTION.hash(data),
            ContentHasher::TRANSACTION.hash(data)
        );
    }

    #[test]
    fn different_domains_produce_different_hashes() {
        let data = b"same content";
        let txn = ContentHasher::TRANSACTION.hash(data);
        let inner = ContentHasher::TRANSACTION_INNER.hash(data);
        let body = ContentHasher::UX_BODY.hash(data);
        let header = ContentHasher::BLOCK_HEADER.hash(data);
        assert_ne!(txn, inner);
        assert_ne!(txn, body);
        assert_ne!(body, header);
    }

    #[test]
    fn hash_encoded_matches_manual_encoding() {
        let value = (7u64, [1u8; 4]);
        let encoded = bincode::serialize(&value).unwrap();
        assert_eq!(
            ContentHasher::UX_BODY.hash_encoded(&value).unwrap(),
            ContentHasher::UX_BODY.hash(&encoded)
        );
    }

    #[test]
    fn merkle_nodes_have_their_own_domain() {
        let data = [9u8; 64];
        assert_ne!(
            ContentHasher::MERKLE_NODE.hash(&data),
            ContentHasher::BLOCK_HEADER.hash(&data)
        );
    }
}

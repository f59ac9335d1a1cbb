use rlv_crypto::{merkle_root, ContentHasher};
use rlv_types::{Hash256, Signature};
use serde::{Deserialize, Serialize};

use crate::error::{CoinError, CoinResult};
use crate::transaction::Transaction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: u32,
    /// Unix seconds.
    pub time: u64,
    pub bk_seq: u64,
    /// Total fee collected, in coin hours.
    pub fee: u64,
    pub prev_hash: Hash256,
    /// Merkle root of the body's transaction hashes.
    pub body_hash: Hash256,
    /// Hash of the unspent-output set after applying this block.
    pub ux_hash: Hash256,
}

impl BlockHeader {
    pub fn hash(&self) -> CoinResult<Hash256> {
        Ok(ContentHasher::BLOCK_HEADER.hash_encoded(self)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockBody {
    pub transactions: Vec<Transaction>,
}

impl BlockBody {
    /// Merkle root of the transaction hashes.
    pub fn hash(&self) -> CoinResult<Hash256> {
        let hashes = self
            .transactions
            .iter()
            .map(Transaction::hash)
            .collect::<CoinResult<Vec<_>>>()?;
        Ok(merkle_root(&hashes))
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> CoinResult<usize> {
        let size =
            bincode::serialized_size(self).map_err(|e| CoinError::Serialization(e.to_string()))?;
        usize::try_from(size).map_err(|e| CoinError::Serialization(e.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub head: BlockHeader,
    pub body: BlockBody,
}

impl Block {
    pub fn seq(&self) -> u64 {
        self.head.bk_seq
    }

    pub fn hash(&self) -> CoinResult<Hash256> {
        self.head.hash()
    }

    /// Encoded size of the body in bytes.
    pub fn size(&self) -> CoinResult<usize> {
        self.body.size()
    }
}

/// A block together with the producer's signature over its hash.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBlock {
    pub block: Block,
    pub sig: Signature,
}

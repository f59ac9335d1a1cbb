use rlv_coin::{Block, BlockHeader, SignedBlock};
use serde::{Deserialize, Serialize};

use crate::error::ReadResult;
use crate::transaction::ReadableTransaction;

/// A block header in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableBlockHeader {
    #[serde(rename = "seq")]
    pub bk_seq: u64,
    pub block_hash: String,
    pub previous_block_hash: String,
    #[serde(rename = "timestamp")]
    pub time: u64,
    pub fee: u64,
    pub version: u32,
    #[serde(rename = "tx_body_hash")]
    pub body_hash: String,
}

impl ReadableBlockHeader {
    pub fn new(header: &BlockHeader) -> ReadResult<Self> {
        Ok(Self {
            bk_seq: header.bk_seq,
            block_hash: header.hash()?.to_hex(),
            previous_block_hash: header.prev_hash.to_hex(),
            time: header.time,
            fee: header.fee,
            version: header.version,
            body_hash: header.body_hash.to_hex(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableBlockBody {
    #[serde(rename = "txns")]
    pub transactions: Vec<ReadableTransaction>,
}

impl ReadableBlockBody {
    /// Every transaction in a block is confirmed at the block's sequence.
    pub fn new(block: &Block) -> ReadResult<Self> {
        let seq = block.seq();
        let transactions = block
            .body
            .transactions
            .iter()
            .map(|txn| ReadableTransaction::build(txn, Some(seq), 0))
            .collect::<ReadResult<Vec<_>>>()?;
        Ok(Self { transactions })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableBlock {
    #[serde(rename = "header")]
    pub head: ReadableBlockHeader,
    pub body: ReadableBlockBody,
    /// Encoded body size in bytes.
    pub size: usize,
}

impl ReadableBlock {
    pub fn new(block: &Block) -> ReadResult<Self> {
        Ok(Self {
            body: ReadableBlockBody::new(block)?,
            head: ReadableBlockHeader::new(&block.head)?,
            size: block.size()?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableBlocks {
    pub blocks: Vec<ReadableBlock>,
}

impl ReadableBlocks {
    /// The first block that fails to convert aborts the batch.
    pub fn new(blocks: &[SignedBlock]) -> ReadResult<Self> {
        let blocks = blocks
            .iter()
            .map(|b| {
                ReadableBlock::new(&b.block).inspect_err(|e| {
                    tracing::debug!(seq = b.block.seq(), error = %e, "failed to render block")
                })
            })
            .collect::<ReadResult<Vec<_>>>()?;
        Ok(Self { blocks })
    }
}

/// Summary of the chain head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainMetadata {
    /// Most recent block's header.
    pub head: ReadableBlockHeader,
    /// Number of unspent outputs.
    pub unspents: u64,
    /// Number of known unconfirmed transactions.
    pub unconfirmed: u64,
}

impl BlockchainMetadata {
    pub fn new(head: &SignedBlock, unconfirmed: u64, unspents: u64) -> ReadResult<Self> {
        Ok(Self {
            head: ReadableBlockHeader::new(&head.block.head)?,
            unspents,
            unconfirmed,
        })
    }
}

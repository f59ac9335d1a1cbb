use serde::{Deserialize, Serialize};

use crate::error::ReadError;

/// Confirmation status of a transaction.
///
/// Exactly one of `confirmed` and `unconfirmed` is set. A confirmed status
/// has a height of at least 1: height 0 means "not confirmed".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatusRepr")]
pub struct TransactionStatus {
    confirmed: bool,
    /// The transaction is in the unconfirmed pool.
    unconfirmed: bool,
    /// Blocks deep in the chain, if confirmed.
    height: u64,
    /// Sequence of the block that executed the transaction.
    block_seq: u64,
}

impl TransactionStatus {
    pub fn unconfirmed() -> Self {
        Self {
            confirmed: false,
            unconfirmed: true,
            height: 0,
            block_seq: 0,
        }
    }

    /// # Panics
    ///
    /// Panics if `height` is 0.
    pub fn confirmed(height: u64, block_seq: u64) -> Self {
        assert!(height != 0, "invalid confirmed transaction height: 0");
        Self {
            confirmed: true,
            unconfirmed: false,
            height,
            block_seq,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn block_seq(&self) -> u64 {
        self.block_seq
    }

    /// Sequence of the confirming block, if confirmed.
    pub fn confirmed_block_seq(&self) -> Option<u64> {
        self.confirmed.then_some(self.block_seq)
    }
}

/// Wire shape of [`TransactionStatus`], checked before it becomes one.
#[derive(Deserialize)]
struct StatusRepr {
    confirmed: bool,
    unconfirmed: bool,
    height: u64,
    block_seq: u64,
}

impl TryFrom<StatusRepr> for TransactionStatus {
    type Error = ReadError;

    fn try_from(repr: StatusRepr) -> Result<Self, Self::Error> {
        match (repr.confirmed, repr.unconfirmed) {
            (true, false) if repr.height != 0 => Ok(Self::confirmed(repr.height, repr.block_seq)),
            (true, false) => Err(ReadError::InvalidStatus(
                "confirmed transaction with height 0".into(),
            )),
            (false, true) if repr.height == 0 && repr.block_seq == 0 => Ok(Self::unconfirmed()),
            (false, true) => Err(ReadError::InvalidStatus(
                "unconfirmed transaction with a height or block".into(),
            )),
            _ => Err(ReadError::InvalidStatus(
                "exactly one of confirmed and unconfirmed must be set".into(),
            )),
        }
    }
}

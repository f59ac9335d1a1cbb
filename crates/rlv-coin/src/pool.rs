use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// A transaction held in the unconfirmed pool.
///
/// Timestamps are nanoseconds since the unix epoch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnconfirmedTxn {
    pub txn: Transaction,
    /// When the transaction entered the pool.
    pub received: i64,
    /// When it was last re-validated against the chain head.
    pub checked: i64,
    /// When it was last announced to peers; zero if never.
    pub announced: i64,
    /// 1 if the transaction passed its last validation.
    pub is_valid: i8,
}

impl UnconfirmedTxn {
    pub fn is_valid(&self) -> bool {
        self.is_valid == 1
    }
}

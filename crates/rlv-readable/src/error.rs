use rlv_coin::CoinError;
use rlv_types::TypeError;

/// Errors produced by readable conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("invalid coins: {source}")]
    Coins { source: CoinError },

    #[error("invalid address: {source}")]
    Address { source: TypeError },

    #[error("invalid {field}: {source}")]
    Hash {
        field: &'static str,
        source: TypeError,
    },

    #[error("readable output is missing its hash")]
    MissingHash,

    #[error("coin hours calculation failed for {uxid}: {source}")]
    CoinHours { uxid: String, source: CoinError },

    #[error("{field} balance overflows uint64")]
    BalanceOverflow { field: &'static str },

    #[error("confirmed transaction in block {block_seq} has no inputs")]
    ConfirmedWithoutInputs { block_seq: u64 },

    #[error("invalid transaction status: {0}")]
    InvalidStatus(String),

    #[error("ledger entity error: {0}")]
    Entity(#[from] CoinError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),
}

impl ReadError {
    pub(crate) fn coins(source: CoinError) -> Self {
        Self::Coins { source }
    }

    pub(crate) fn address(source: TypeError) -> Self {
        Self::Address { source }
    }

    pub(crate) fn hash(field: &'static str) -> impl FnOnce(TypeError) -> Self {
        move |source| Self::Hash { field, source }
    }
}

pub type ReadResult<T> = Result<T, ReadError>;

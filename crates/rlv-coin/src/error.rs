use rlv_crypto::HasherError;

/// Errors produced by ledger entity operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinError {
    #[error("droplet value exceeds the maximum encodable amount")]
    DropletTooLarge,

    #[error("droplet value cannot be negative")]
    NegativeAmount,

    #[error("droplet value has too many decimal places")]
    TooManyDecimals,

    #[error("invalid droplet string: {0:?}")]
    InvalidAmount(String),

    #[error("uint64 addition overflow")]
    AddOverflow,

    #[error("coin seconds overflow uint64: seconds={seconds} coins={coins}")]
    CoinSecondsOverflow { seconds: u64, coins: u64 },

    #[error("droplet seconds overflow uint64: seconds={seconds} droplets={droplets}")]
    DropletSecondsOverflow { seconds: u64, droplets: u64 },

    #[error("adding earned coin hours to declared hours overflows uint64")]
    EarnedHoursOverflow,

    #[error("hashing error: {0}")]
    Hash(#[from] HasherError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type CoinResult<T> = Result<T, CoinError>;

//! Readable ledger view.
//!
//! Converts binary ledger entities from `rlv-coin` into their wire-stable
//! display form (hex hashes, decimal coin strings, explicit confirmation
//! status) and reconciles the three views of unspent outputs a wallet needs:
//!
//! - **head**: confirmed, unspent
//! - **outgoing**: head outputs being spent by pending transactions
//! - **incoming**: outputs pending transactions will create
//!
//! Every conversion is a pure function. The only side channel is the
//! [`HoursObserver`] notified when a known coin-hours overflow is tolerated.

pub mod block;
pub mod config;
pub mod error;
pub mod json;
pub mod observer;
pub mod output;
pub mod status;
pub mod transaction;

pub use block::{
    BlockchainMetadata, ReadableBlock, ReadableBlockBody, ReadableBlockHeader, ReadableBlocks,
};
pub use config::ViewConfig;
pub use error::{ReadError, ReadResult};
pub use json::{transaction_to_json, TransactionJson, TransactionOutputJson};
pub use observer::{HoursObserver, NoopObserver, TracingObserver};
pub use output::{Balance, ReadableOutput, ReadableOutputSet, ReadableOutputs, UxBalance};
pub use status::TransactionStatus;
pub use transaction::{
    ReadableTransaction, ReadableTransactionInput, ReadableTransactionOutput,
    ReadableUnconfirmedTxn, TransactionWithStatus,
};

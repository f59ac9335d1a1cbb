//! Ledger entities consumed by the readable ledger view.
//!
//! These are the canonical binary-oriented records the view layer reads:
//! unspent outputs, transactions, blocks and unconfirmed pool entries. Each
//! entity exposes its content hash; unspent outputs additionally expose
//! coin-hour accrual as a pure function of a reference time.
//!
//! - [`droplet`]: fixed-point amount codec (1 coin = 10^6 droplets)
//! - [`UxOut`]: unspent output with head (time, block seq) and body
//! - [`Transaction`]: signed transaction with inputs and outputs
//! - [`Block`] / [`SignedBlock`]: header plus ordered transaction body
//! - [`UnconfirmedTxn`]: pending pool record with nanosecond timestamps

pub mod block;
pub mod droplet;
pub mod error;
pub mod math;
pub mod pool;
pub mod transaction;
pub mod ux;

pub use block::{Block, BlockBody, BlockHeader, SignedBlock};
pub use error::{CoinError, CoinResult};
pub use math::add_u64;
pub use pool::UnconfirmedTxn;
pub use transaction::{Transaction, TransactionOutput};
pub use ux::{HoursAccrual, UxArray, UxBody, UxHead, UxOut};

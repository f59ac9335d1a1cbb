//! Foundation types for the readable ledger view (RLV).
//!
//! This crate provides the fixed-size value types that every other RLV crate
//! exchanges. Each type owns its text codec: hashes and signatures are
//! lower-case hex, addresses are base58 with a checksum.
//!
//! # Key Types
//!
//! - [`Hash256`]: 32-byte content hash, hex encoded on the wire
//! - [`Address`]: versioned 20-byte key hash, base58 encoded
//! - [`Signature`]: 65-byte transaction signature, hex encoded

pub mod address;
pub mod error;
pub mod hash;
pub mod signature;

pub use address::Address;
pub use error::TypeError;
pub use hash::Hash256;
pub use signature::Signature;

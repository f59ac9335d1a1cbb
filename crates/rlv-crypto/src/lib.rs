//! Content hashing for the readable ledger view.
//!
//! Provides domain-separated BLAKE3 hashing over the canonical `bincode`
//! encoding of ledger entities, and binary Merkle roots for block bodies.

pub mod hasher;
pub mod merkle;

pub use hasher::{ContentHasher, HasherError};
pub use merkle::merkle_root;

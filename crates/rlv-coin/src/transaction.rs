use rlv_crypto::ContentHasher;
use rlv_types::{Address, Hash256, Signature};
use serde::{Deserialize, Serialize};

use crate::error::{CoinError, CoinResult};
use crate::ux::UxBody;

/// An output created by a transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub address: Address,
    /// Amount in droplets.
    pub coins: u64,
    pub hours: u64,
}

impl TransactionOutput {
    /// Id of the unspent output this creates once `txid` is confirmed.
    ///
    /// Outputs are only unique in the context of their transaction, so the
    /// id is the hash of the output body with `txid` as source.
    pub fn ux_id(&self, txid: Hash256) -> CoinResult<Hash256> {
        UxBody {
            src_transaction: txid,
            address: self.address,
            coins: self.coins,
            hours: self.hours,
        }
        .hash()
    }
}

/// A signed transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Encoded length in bytes.
    pub length: u32,
    pub tx_type: u8,
    /// Hash of the signable body (inputs and outputs).
    pub inner_hash: Hash256,
    /// One signature per input.
    pub sigs: Vec<Signature>,
    /// Ids of the unspent outputs being spent.
    pub inputs: Vec<Hash256>,
    pub outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// Content hash of the full transaction, signatures included.
    pub fn hash(&self) -> CoinResult<Hash256> {
        Ok(ContentHasher::TRANSACTION.hash_encoded(self)?)
    }

    /// Hash of the signable body.
    pub fn hash_inner(&self) -> CoinResult<Hash256> {
        Ok(ContentHasher::TRANSACTION_INNER.hash_encoded(&(&self.inputs, &self.outputs))?)
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> CoinResult<u32> {
        let size =
            bincode::serialized_size(self).map_err(|e| CoinError::Serialization(e.to_string()))?;
        u32::try_from(size)
            .map_err(|_| CoinError::Serialization(format!("transaction too large: {size} bytes")))
    }

    /// Recompute `inner_hash` and `length` from the current contents.
    pub fn update_header(&mut self) -> CoinResult<()> {
        self.inner_hash = self.hash_inner()?;
        self.length = self.size()?;
        Ok(())
    }
}

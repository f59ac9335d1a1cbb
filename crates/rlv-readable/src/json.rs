//! Stand-alone JSON export of bare transactions.

use rlv_coin::{droplet, Transaction, TransactionOutput, UxBody};
use rlv_types::Hash256;
use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::error::{ReadError, ReadResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutputJson {
    pub hash: String,
    #[serde(rename = "src_tx")]
    pub source_transaction: String,
    /// Receiving address.
    pub address: String,
    pub coins: String,
    pub hours: u64,
}

impl TransactionOutputJson {
    pub fn new(out: &TransactionOutput, src_tx: Hash256) -> ReadResult<Self> {
        let body = UxBody {
            src_transaction: src_tx,
            address: out.address,
            coins: out.coins,
            hours: out.hours,
        };
        Ok(Self {
            hash: body.hash()?.to_hex(),
            source_transaction: src_tx.to_hex(),
            address: out.address.to_base58(),
            coins: droplet::encode(out.coins).map_err(ReadError::coins)?,
            hours: out.hours,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionJson {
    pub hash: String,
    pub inner_hash: String,

    pub sigs: Vec<String>,
    #[serde(rename = "in")]
    pub inputs: Vec<String>,
    #[serde(rename = "out")]
    pub outputs: Vec<TransactionOutputJson>,
}

impl TransactionJson {
    /// Output hashes use the inner hash as their source transaction.
    pub fn new(txn: &Transaction) -> ReadResult<Self> {
        Ok(Self {
            hash: txn.hash()?.to_hex(),
            inner_hash: txn.inner_hash.to_hex(),
            sigs: txn.sigs.iter().map(|s| s.to_hex()).collect(),
            inputs: txn.inputs.iter().map(Hash256::to_hex).collect(),
            outputs: txn
                .outputs
                .iter()
                .map(|out| TransactionOutputJson::new(out, txn.inner_hash))
                .collect::<ReadResult<Vec<_>>>()?,
        })
    }
}

/// Render `txn` as indented JSON.
pub fn transaction_to_json(txn: &Transaction, config: &ViewConfig) -> ReadResult<String> {
    let value = TransactionJson::new(txn)?;

    let indent = " ".repeat(config.json_indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| ReadError::Serialization(format!("serialize TransactionJson failed: {e}")))?;

    String::from_utf8(buf).map_err(|e| ReadError::Serialization(e.to_string()))
}

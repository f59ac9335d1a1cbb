use chrono::{DateTime, TimeZone, Utc};
use rlv_coin::{droplet, Transaction, TransactionOutput, UnconfirmedTxn, UxOut};
use rlv_types::Hash256;
use serde::{Deserialize, Serialize};

use crate::error::{ReadError, ReadResult};
use crate::observer::HoursObserver;
use crate::status::TransactionStatus;

/// A transaction tagged with its confirmation status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionWithStatus {
    pub txn: Transaction,
    pub status: TransactionStatus,
    /// Unix seconds of the confirming block; 0 if unknown.
    pub time: u64,
}

/// An output created by a transaction, in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableTransactionOutput {
    #[serde(rename = "uxid")]
    pub hash: String,
    #[serde(rename = "dst")]
    pub address: String,
    pub coins: String,
    pub hours: u64,
}

impl ReadableTransactionOutput {
    /// `txid` is the id of the transaction creating the output.
    pub fn new(out: &TransactionOutput, txid: Hash256) -> ReadResult<Self> {
        Ok(Self {
            hash: out.ux_id(txid)?.to_hex(),
            address: out.address.to_base58(),
            coins: droplet::encode(out.coins).map_err(ReadError::coins)?,
            hours: out.hours,
        })
    }
}

/// An output consumed by a transaction, in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableTransactionInput {
    #[serde(rename = "uxid")]
    pub hash: String,
    #[serde(rename = "owner")]
    pub address: String,
    pub coins: String,
    pub hours: u64,
    pub calculated_hours: u64,
}

impl ReadableTransactionInput {
    /// Render the spent output `ux` with hours calculated as of
    /// `calculate_hours_time`.
    ///
    /// Historical inputs exist whose hour accrual overflows in more than one
    /// way, so any accrual failure here is reported to `observer` and
    /// rendered as 0 calculated hours.
    pub fn new(
        ux: &UxOut,
        calculate_hours_time: u64,
        observer: &dyn HoursObserver,
    ) -> ReadResult<Self> {
        let coins = droplet::encode(ux.body.coins).map_err(ReadError::coins)?;
        let uxid = ux.hash()?;

        let calculated_hours = ux
            .coin_hours(calculate_hours_time)
            .unwrap_or_else(|reason| {
                observer.hours_overflow(&uxid, &reason);
                0
            });

        Ok(Self {
            hash: uxid.to_hex(),
            address: ux.body.address.to_base58(),
            coins,
            hours: ux.body.hours,
            calculated_hours,
        })
    }
}

/// A transaction in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableTransaction {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timestamp: u64,
    pub length: u32,
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(rename = "txid")]
    pub hash: String,
    pub inner_hash: String,

    pub sigs: Vec<String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<ReadableTransactionOutput>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl ReadableTransaction {
    pub fn new(tx: &TransactionWithStatus) -> ReadResult<Self> {
        Self::build(&tx.txn, tx.status.confirmed_block_seq(), tx.time)
    }

    /// `confirmed_in` is the sequence of the block containing `txn`, if any.
    pub(crate) fn build(
        txn: &Transaction,
        confirmed_in: Option<u64>,
        time: u64,
    ) -> ReadResult<Self> {
        if let Some(block_seq) = confirmed_in {
            if block_seq != 0 && txn.inputs.is_empty() {
                return Err(ReadError::ConfirmedWithoutInputs { block_seq });
            }
        }

        // The genesis transaction's id is the zero hash by convention.
        let txid = match confirmed_in {
            Some(0) => Hash256::zero(),
            _ => txn.hash()?,
        };

        let outputs = txn
            .outputs
            .iter()
            .map(|out| ReadableTransactionOutput::new(out, txid))
            .collect::<ReadResult<Vec<_>>>()?;

        Ok(Self {
            timestamp: time,
            length: txn.length,
            tx_type: txn.tx_type,
            hash: txid.to_hex(),
            inner_hash: txn.inner_hash.to_hex(),
            sigs: txn.sigs.iter().map(|s| s.to_hex()).collect(),
            inputs: txn.inputs.iter().map(Hash256::to_hex).collect(),
            outputs,
        })
    }
}

/// A pending transaction with its pool bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableUnconfirmedTxn {
    #[serde(rename = "transaction")]
    pub txn: ReadableTransaction,
    pub received: DateTime<Utc>,
    pub checked: DateTime<Utc>,
    pub announced: DateTime<Utc>,
    pub is_valid: bool,
}

impl ReadableUnconfirmedTxn {
    pub fn new(unconfirmed: &UnconfirmedTxn) -> ReadResult<Self> {
        Ok(Self {
            txn: ReadableTransaction::build(&unconfirmed.txn, None, 0)?,
            received: nano_to_time(unconfirmed.received),
            checked: nano_to_time(unconfirmed.checked),
            announced: nano_to_time(unconfirmed.announced),
            is_valid: unconfirmed.is_valid(),
        })
    }

    /// Render the whole pool. The first failure aborts the batch.
    pub fn from_pool(txns: &[UnconfirmedTxn]) -> ReadResult<Vec<Self>> {
        txns.iter().map(Self::new).collect()
    }
}

fn nano_to_time(nanos: i64) -> DateTime<Utc> {
    Utc.timestamp_nanos(nanos)
}

#[cfg(test)]
mod tests {
    use rlv_coin::{CoinError, UxBody, UxHead};
    use rlv_types::{Address, Signature};

    use super::*;
    use crate::observer::testing::RecordingObserver;
    use crate::observer::NoopObserver;

    fn txn(inputs: usize) -> Transaction {
        let mut txn = Transaction {
            sigs: (0..inputs)
                .map(|i| Signature::from_bytes([i as u8; 65]))
                .collect(),
            inputs: (0..inputs)
                .map(|i| Hash256::from_bytes([i as u8 + 1; 32]))
                .collect(),
            outputs: vec![
                TransactionOutput {
                    address: Address::from_public_key(b"alice"),
                    coins: 1_000_000,
                    hours: 5,
                },
                TransactionOutput {
                    address: Address::from_public_key(b"bob"),
                    coins: 250_000,
                    hours: 1,
                },
            ],
            ..Default::default()
        };
        txn.update_header().unwrap();
        txn
    }

    fn with_status(txn: Transaction, status: TransactionStatus) -> TransactionWithStatus {
        TransactionWithStatus {
            txn,
            status,
            time: 0,
        }
    }

    #[test]
    fn renders_all_fields() {
        let t = txn(2);
        let rt = ReadableTransaction::new(&TransactionWithStatus {
            txn: t.clone(),
            status: TransactionStatus::confirmed(4, 12),
            time: 1_500_000_000,
        })
        .unwrap();

        let txid = t.hash().unwrap();
        assert_eq!(rt.timestamp, 1_500_000_000);
        assert_eq!(rt.length, t.length);
        assert_eq!(rt.tx_type, 0);
        assert_eq!(rt.hash, txid.to_hex());
        assert_eq!(rt.inner_hash, t.inner_hash.to_hex());
        assert_eq!(rt.sigs, vec![t.sigs[0].to_hex(), t.sigs[1].to_hex()]);
        assert_eq!(rt.inputs, vec![t.inputs[0].to_hex(), t.inputs[1].to_hex()]);
        assert_eq!(rt.outputs.len(), 2);
        assert_eq!(rt.outputs[0].hash, t.outputs[0].ux_id(txid).unwrap().to_hex());
        assert_eq!(rt.outputs[0].coins, "1.000000");
        assert_eq!(rt.outputs[1].coins, "0.250000");
        assert_eq!(rt.outputs[1].address, t.outputs[1].address.to_base58());
    }

    #[test]
    fn genesis_transaction_uses_zero_id() {
        let t = txn(0);
        let rt = ReadableTransaction::new(&with_status(
            t.clone(),
            TransactionStatus::confirmed(1, 0),
        ))
        .unwrap();
        assert_eq!(rt.hash, Hash256::zero().to_hex());
        assert_eq!(
            rt.outputs[0].hash,
            t.outputs[0].ux_id(Hash256::zero()).unwrap().to_hex()
        );
    }

    #[test]
    fn unconfirmed_at_sequence_zero_uses_real_id() {
        let t = txn(0);
        let rt =
            ReadableTransaction::new(&with_status(t.clone(), TransactionStatus::unconfirmed()))
                .unwrap();
        assert_eq!(rt.hash, t.hash().unwrap().to_hex());
    }

    #[test]
    fn confirmed_without_inputs_is_an_error() {
        let err =
            ReadableTransaction::new(&with_status(txn(0), TransactionStatus::confirmed(2, 7)))
                .unwrap_err();
        assert_eq!(err, ReadError::ConfirmedWithoutInputs { block_seq: 7 });
    }

    #[test]
    fn unconfirmed_without_inputs_is_allowed() {
        assert!(
            ReadableTransaction::new(&with_status(txn(0), TransactionStatus::unconfirmed()))
                .is_ok()
        );
    }

    #[test]
    fn unencodable_output_coins_are_an_error() {
        let mut t = txn(1);
        t.outputs[1].coins = u64::MAX;
        let err = ReadableTransaction::new(&with_status(t, TransactionStatus::unconfirmed()))
            .unwrap_err();
        assert!(matches!(err, ReadError::Coins { .. }));
    }

    #[test]
    fn zero_timestamp_is_omitted() {
        let rt = ReadableTransaction::new(&with_status(txn(1), TransactionStatus::unconfirmed()))
            .unwrap();
        let json = serde_json::to_value(&rt).unwrap();
        assert!(json.get("timestamp").is_none());
        for key in ["length", "type", "txid", "inner_hash", "sigs", "inputs", "outputs"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        let out = &json["outputs"][0];
        for key in ["uxid", "dst", "coins", "hours"] {
            assert!(out.get(key).is_some(), "missing output {key}");
        }

        let parsed: ReadableTransaction = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, rt);
    }

    #[test]
    fn non_zero_timestamp_is_present() {
        let rt = ReadableTransaction::new(&TransactionWithStatus {
            txn: txn(1),
            status: TransactionStatus::confirmed(1, 3),
            time: 42,
        })
        .unwrap();
        let json = serde_json::to_value(&rt).unwrap();
        assert_eq!(json["timestamp"], 42);
    }

    fn spent(hours: u64) -> UxOut {
        UxOut {
            head: UxHead { time: 0, bk_seq: 3 },
            body: UxBody {
                src_transaction: Hash256::from_bytes([8; 32]),
                address: Address::from_public_key(b"carol"),
                coins: 2_000_000,
                hours,
            },
        }
    }

    #[test]
    fn input_calculates_hours() {
        let ux = spent(1);
        let input = ReadableTransactionInput::new(&ux, 3600, &NoopObserver).unwrap();
        assert_eq!(input.hash, ux.hash().unwrap().to_hex());
        assert_eq!(input.address, ux.body.address.to_base58());
        assert_eq!(input.coins, "2.000000");
        assert_eq!(input.hours, 1);
        assert_eq!(input.calculated_hours, 3);

        let json = serde_json::to_value(&input).unwrap();
        for key in ["uxid", "owner", "coins", "hours", "calculated_hours"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn input_tolerates_earned_hours_overflow() {
        let observer = RecordingObserver::default();
        let ux = spent(u64::MAX);
        let input = ReadableTransactionInput::new(&ux, 3600, &observer).unwrap();
        assert_eq!(input.calculated_hours, 0);
        assert_eq!(observer.count(), 1);
    }

    #[test]
    fn input_tolerates_coin_seconds_overflow() {
        let observer = RecordingObserver::default();
        let ux = spent(0);
        let input = ReadableTransactionInput::new(&ux, u64::MAX, &observer).unwrap();
        assert_eq!(input.calculated_hours, 0);
        let reports = observer.reports.lock().unwrap();
        assert!(matches!(
            reports[0].1,
            CoinError::CoinSecondsOverflow { .. }
        ));
    }

    #[test]
    fn input_rejects_unencodable_coins() {
        let mut ux = spent(0);
        ux.body.coins = u64::MAX;
        assert!(matches!(
            ReadableTransactionInput::new(&ux, 0, &NoopObserver),
            Err(ReadError::Coins { .. })
        ));
    }

    #[test]
    fn unconfirmed_txn_converts_nanoseconds() {
        let t = txn(1);
        let pool = UnconfirmedTxn {
            txn: t.clone(),
            received: 1_500_000_000_123_456_789,
            checked: 1_500_000_060_000_000_000,
            announced: 0,
            is_valid: 1,
        };
        let rut = ReadableUnconfirmedTxn::new(&pool).unwrap();
        assert_eq!(rut.received.timestamp(), 1_500_000_000);
        assert_eq!(rut.received.timestamp_subsec_nanos(), 123_456_789);
        assert_eq!(rut.checked.timestamp(), 1_500_000_060);
        assert_eq!(rut.announced.timestamp(), 0);
        assert!(rut.is_valid);
        assert_eq!(rut.txn.hash, t.hash().unwrap().to_hex());
        assert_eq!(rut.txn.timestamp, 0);

        let json = serde_json::to_value(&rut).unwrap();
        for key in ["transaction", "received", "checked", "announced", "is_valid"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn invalid_flag_is_false_unless_one() {
        let pool = UnconfirmedTxn {
            txn: txn(1),
            is_valid: 0,
            ..Default::default()
        };
        assert!(!ReadableUnconfirmedTxn::new(&pool).unwrap().is_valid);
    }

    #[test]
    fn pool_conversion_aborts_on_failure() {
        let good = UnconfirmedTxn {
            txn: txn(1),
            ..Default::default()
        };
        let mut bad = good.clone();
        bad.txn.outputs[0].coins = u64::MAX;

        assert_eq!(
            ReadableUnconfirmedTxn::from_pool(&[good.clone(), good.clone()])
                .unwrap()
                .len(),
            2
        );
        assert!(ReadableUnconfirmedTxn::from_pool(&[good, bad]).is_err());
    }
}

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::ops::Deref;

use rlv_coin::{add_u64, droplet, CoinError, HoursAccrual, UxArray, UxBody, UxHead, UxOut};
use rlv_types::{Address, Hash256};
use serde::{Deserialize, Serialize};

use crate::error::{ReadError, ReadResult};
use crate::observer::HoursObserver;

/// An unspent output in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableOutput {
    pub hash: String,
    pub time: u64,
    #[serde(rename = "block_seq")]
    pub bk_seq: u64,
    #[serde(rename = "src_tx")]
    pub source_transaction: String,
    pub address: String,
    pub coins: String,
    pub hours: u64,
    pub calculated_hours: u64,
}

impl ReadableOutput {
    /// Render `ux` with hours calculated as of `head_time`.
    ///
    /// One spent output on the main chain carries declared hours so large
    /// that adding earned hours overflows. That outcome is reported to
    /// `observer` and rendered as 0 calculated hours. Every other accrual
    /// failure is an error.
    pub fn new(head_time: u64, ux: &UxOut, observer: &dyn HoursObserver) -> ReadResult<Self> {
        let coins = droplet::encode(ux.body.coins).map_err(ReadError::coins)?;
        let uxid = ux.hash()?;

        let calculated_hours = match ux.accrue_hours(head_time) {
            Ok(HoursAccrual::Hours(hours)) => hours,
            Ok(HoursAccrual::EarnedOverflow) => {
                observer.hours_overflow(&uxid, &CoinError::EarnedHoursOverflow);
                0
            }
            Err(source) => {
                return Err(ReadError::CoinHours {
                    uxid: uxid.to_hex(),
                    source,
                })
            }
        };

        Ok(Self {
            hash: uxid.to_hex(),
            time: ux.head.time,
            bk_seq: ux.head.bk_seq,
            source_transaction: ux.body.src_transaction.to_hex(),
            address: ux.body.address.to_base58(),
            coins,
            hours: ux.body.hours,
            calculated_hours,
        })
    }
}

/// Newest first; equal times ordered by ascending hash.
fn newest_first(a: &ReadableOutput, b: &ReadableOutput) -> Ordering {
    b.time.cmp(&a.time).then_with(|| a.hash.cmp(&b.hash))
}

/// Aggregate coins (droplets) and calculated hours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub coins: u64,
    pub hours: u64,
}

/// Decoded output used by wallet balance and spend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UxBalance {
    pub hash: Hash256,
    pub time: u64,
    pub bk_seq: u64,
    pub src_transaction: Hash256,
    pub address: Address,
    pub coins: u64,
    /// Calculated hours.
    pub hours: u64,
    /// Declared hours.
    pub initial_hours: u64,
}

/// An ordered collection of readable outputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadableOutputs(Vec<ReadableOutput>);

impl ReadableOutputs {
    pub fn new(outputs: Vec<ReadableOutput>) -> Self {
        Self(outputs)
    }

    /// Render a batch of unspent outputs, newest first.
    ///
    /// Outputs sharing a creation time are ordered by ascending hash, so the
    /// result is fully determined by the input set. The first failing output
    /// aborts the batch.
    pub fn from_unspents(
        head_time: u64,
        uxs: &[UxOut],
        observer: &dyn HoursObserver,
    ) -> ReadResult<Self> {
        let mut outputs = uxs
            .iter()
            .map(|ux| ReadableOutput::new(head_time, ux, observer))
            .collect::<ReadResult<Vec<_>>>()
            .inspect_err(|e| tracing::debug!(error = %e, "failed to render unspent outputs"))?;
        outputs.sort_by(newest_first);
        Ok(Self(outputs))
    }

    pub fn into_inner(self) -> Vec<ReadableOutput> {
        self.0
    }

    /// Total coins and calculated hours. Overflow is an error.
    pub fn balance(&self) -> ReadResult<Balance> {
        let mut bal = Balance::default();
        for out in &self.0 {
            let coins = droplet::decode(&out.coins).map_err(ReadError::coins)?;
            bal.coins = add_u64(bal.coins, coins)
                .map_err(|_| ReadError::BalanceOverflow { field: "coins" })?;
            bal.hours = add_u64(bal.hours, out.calculated_hours)
                .map_err(|_| ReadError::BalanceOverflow { field: "hours" })?;
        }
        Ok(bal)
    }

    /// Convert back to native unspent outputs.
    ///
    /// Output hashes are not carried: a native output's id is derived from
    /// its body.
    pub fn to_ux_array(&self) -> ReadResult<UxArray> {
        self.0
            .iter()
            .map(|o| {
                let coins = droplet::decode(&o.coins).map_err(ReadError::coins)?;
                let address = Address::from_base58(&o.address).map_err(ReadError::address)?;
                let src_transaction =
                    Hash256::from_hex(&o.source_transaction).map_err(ReadError::hash("src_tx"))?;
                Ok(UxOut {
                    head: UxHead {
                        time: o.time,
                        bk_seq: o.bk_seq,
                    },
                    body: UxBody {
                        src_transaction,
                        address,
                        coins,
                        hours: o.hours,
                    },
                })
            })
            .collect()
    }

    /// Decode into wallet balance records.
    pub fn to_ux_balances(&self) -> ReadResult<Vec<UxBalance>> {
        self.0
            .iter()
            .map(|o| {
                if o.hash.is_empty() {
                    return Err(ReadError::MissingHash);
                }
                Ok(UxBalance {
                    hash: Hash256::from_hex(&o.hash).map_err(ReadError::hash("hash"))?,
                    time: o.time,
                    bk_seq: o.bk_seq,
                    src_transaction: Hash256::from_hex(&o.source_transaction)
                        .map_err(ReadError::hash("src_tx"))?,
                    address: Address::from_base58(&o.address).map_err(ReadError::address)?,
                    coins: droplet::decode(&o.coins).map_err(ReadError::coins)?,
                    hours: o.calculated_hours,
                    initial_hours: o.hours,
                })
            })
            .collect()
    }
}

impl Deref for ReadableOutputs {
    type Target = [ReadableOutput];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ReadableOutput>> for ReadableOutputs {
    fn from(outputs: Vec<ReadableOutput>) -> Self {
        Self(outputs)
    }
}

impl FromIterator<ReadableOutput> for ReadableOutputs {
    fn from_iter<I: IntoIterator<Item = ReadableOutput>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ReadableOutputs {
    type Item = ReadableOutput;
    type IntoIter = std::vec::IntoIter<ReadableOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Unspent outputs in their three states.
///
/// Built by the caller from one snapshot of the confirmed set and the
/// unconfirmed pool. Every outgoing hash is also a head hash; incoming hashes
/// appear in neither.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableOutputSet {
    /// Confirmed and unspent.
    pub head_outputs: ReadableOutputs,
    /// Head outputs being spent by unconfirmed transactions.
    pub outgoing_outputs: ReadableOutputs,
    /// Outputs unconfirmed transactions will create.
    pub incoming_outputs: ReadableOutputs,
}

impl ReadableOutputSet {
    /// Head outputs not being spent, in head order.
    ///
    /// Borrows the head outputs when nothing is outgoing.
    pub fn spendable_outputs(&self) -> Cow<'_, [ReadableOutput]> {
        if self.outgoing_outputs.is_empty() {
            return Cow::Borrowed(&*self.head_outputs);
        }

        let spending: HashSet<&str> = self
            .outgoing_outputs
            .iter()
            .map(|o| o.hash.as_str())
            .collect();

        Cow::Owned(
            self.head_outputs
                .iter()
                .filter(|o| !spending.contains(o.hash.as_str()))
                .cloned()
                .collect(),
        )
    }

    /// Spendable outputs followed by incoming outputs.
    pub fn expected_outputs(&self) -> ReadableOutputs {
        let mut outs = self.spendable_outputs().into_owned();
        outs.extend(self.incoming_outputs.iter().cloned());
        ReadableOutputs(outs)
    }

    /// Total coins per address over the head outputs.
    pub fn aggregate_unspent_outputs(&self) -> ReadResult<HashMap<String, u64>> {
        let mut accounts: HashMap<String, u64> = HashMap::new();
        for out in self.head_outputs.iter() {
            let amount = droplet::decode(&out.coins).map_err(ReadError::coins)?;
            let total = accounts.entry(out.address.clone()).or_insert(0);
            *total = add_u64(*total, amount)
                .map_err(|_| ReadError::BalanceOverflow { field: "coins" })?;
        }
        Ok(accounts)
    }
}

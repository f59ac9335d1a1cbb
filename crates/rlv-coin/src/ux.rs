use rlv_crypto::ContentHasher;
use rlv_types::{Address, Hash256};
use serde::{Deserialize, Serialize};

use crate::droplet::DROPLETS_PER_COIN;
use crate::error::{CoinError, CoinResult};
use crate::math::add_u64;

const SECONDS_PER_HOUR: u64 = 3600;

/// Where and when an unspent output was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxHead {
    /// Unix seconds of the creating block.
    pub time: u64,
    /// Sequence number of the creating block.
    pub bk_seq: u64,
}

/// The hashed part of an unspent output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxBody {
    pub src_transaction: Hash256,
    pub address: Address,
    /// Amount in droplets.
    pub coins: u64,
    /// Declared hours at creation.
    pub hours: u64,
}

impl UxBody {
    /// Content hash of the body. This is the id of the unspent output.
    pub fn hash(&self) -> CoinResult<Hash256> {
        Ok(ContentHasher::UX_BODY.hash_encoded(self)?)
    }
}

/// Result of accruing coin hours.
///
/// Adding earned hours to declared hours can overflow for outputs whose
/// declared hours are already near `u64::MAX`. That case is reported as
/// [`HoursAccrual::EarnedOverflow`] instead of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoursAccrual {
    Hours(u64),
    EarnedOverflow,
}

/// An unspent output record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxOut {
    pub head: UxHead,
    pub body: UxBody,
}

pub type UxArray = Vec<UxOut>;

impl UxOut {
    /// Id of the output. Only the body is hashed.
    pub fn hash(&self) -> CoinResult<Hash256> {
        self.body.hash()
    }

    /// Accrue coin hours as of unix time `t`.
    ///
    /// Earned hours are whole coins times elapsed seconds, plus the droplet
    /// remainder times elapsed seconds scaled down to coins, divided into
    /// hours. A reference time before creation yields the declared hours.
    pub fn accrue_hours(&self, t: u64) -> CoinResult<HoursAccrual> {
        if t < self.head.time {
            return Ok(HoursAccrual::Hours(self.body.hours));
        }

        let seconds = t - self.head.time;

        let whole_coins = self.body.coins / DROPLETS_PER_COIN;
        let whole_coin_seconds = seconds
            .checked_mul(whole_coins)
            .ok_or(CoinError::CoinSecondsOverflow {
                seconds,
                coins: whole_coins,
            })?;

        let remainder_droplets = self.body.coins % DROPLETS_PER_COIN;
        let droplet_seconds = seconds
            .checked_mul(remainder_droplets)
            .ok_or(CoinError::DropletSecondsOverflow {
                seconds,
                droplets: remainder_droplets,
            })?;

        let coin_seconds = whole_coin_seconds
            .checked_add(droplet_seconds / DROPLETS_PER_COIN)
            .ok_or(CoinError::CoinSecondsOverflow {
                seconds,
                coins: whole_coins,
            })?;

        let earned = coin_seconds / SECONDS_PER_HOUR;
        Ok(match add_u64(self.body.hours, earned) {
            Ok(total) => HoursAccrual::Hours(total),
            Err(_) => HoursAccrual::EarnedOverflow,
        })
    }

    /// Accrue coin hours as of unix time `t`, treating every overflow as an
    /// error.
    pub fn coin_hours(&self, t: u64) -> CoinResult<u64> {
        match self.accrue_hours(t)? {
            HoursAccrual::Hours(hours) => Ok(hours),
            HoursAccrual::EarnedOverflow => Err(CoinError::EarnedHoursOverflow),
        }
    }
}

//! Fixed-point coin amount codec.
//!
//! Amounts are held as integer droplets and rendered as decimal strings with
//! exactly [`EXPONENT`] fractional digits, e.g. `1500000` <-> `"1.500000"`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, Signed, ToPrimitive};

use crate::error::{CoinError, CoinResult};

/// Number of fractional digits in the canonical string form.
pub const EXPONENT: usize = 6;

/// Droplets in one whole coin.
pub const DROPLETS_PER_COIN: u64 = 1_000_000;

/// Largest amount that can be encoded.
pub const MAX_DROPLETS: u64 = i64::MAX as u64;

/// Digits in the largest whole coin amount.
const MAX_WHOLE_DIGITS: i64 = 13;

/// Render droplets as a canonical decimal string.
pub fn encode(droplets: u64) -> CoinResult<String> {
    if droplets > MAX_DROPLETS {
        return Err(CoinError::DropletTooLarge);
    }
    Ok(format!(
        "{}.{:0width$}",
        droplets / DROPLETS_PER_COIN,
        droplets % DROPLETS_PER_COIN,
        width = EXPONENT
    ))
}

/// Parse a decimal coin string into droplets.
///
/// Any notation `BigDecimal` accepts is allowed, including exponents. The
/// value may not be negative (negative zero is zero) and may not carry more
/// than [`EXPONENT`] significant fractional digits.
pub fn decode(s: &str) -> CoinResult<u64> {
    let amount = BigDecimal::from_str(s)
        .map_err(|_| CoinError::InvalidAmount(s.to_string()))?
        .normalized();
    if amount.is_negative() {
        return Err(CoinError::NegativeAmount);
    }

    // Scale checks run before any arithmetic so huge exponents stay cheap.
    let (_, scale) = amount.as_bigint_and_exponent();
    if scale > EXPONENT as i64 {
        return Err(CoinError::TooManyDecimals);
    }
    if scale < -MAX_WHOLE_DIGITS {
        return Err(CoinError::DropletTooLarge);
    }

    let droplets = amount * BigDecimal::from(DROPLETS_PER_COIN);
    if !droplets.is_integer() {
        return Err(CoinError::TooManyDecimals);
    }
    let droplets = droplets.to_i64().ok_or(CoinError::DropletTooLarge)?;
    u64::try_from(droplets).map_err(|_| CoinError::NegativeAmount)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn encode_uses_fixed_scale() {
        assert_eq!(encode(0).unwrap(), "0.000000");
        assert_eq!(encode(1).unwrap(), "0.000001");
        assert_eq!(encode(1_500_000).unwrap(), "1.500000");
        assert_eq!(encode(123_000_000).unwrap(), "123.000000");
    }

    #[test]
    fn encode_rejects_values_above_i64() {
        assert_eq!(encode(MAX_DROPLETS + 1), Err(CoinError::DropletTooLarge));
        assert!(encode(MAX_DROPLETS).is_ok());
    }

    #[test]
    fn decode_accepts_plain_decimals() {
        assert_eq!(decode("1"), Ok(1_000_000));
        assert_eq!(decode("1.5"), Ok(1_500_000));
        assert_eq!(decode("0.000001"), Ok(1));
        assert_eq!(decode("10.100000"), Ok(10_100_000));
        assert_eq!(decode("2.50000000"), Ok(2_500_000));
    }

    #[test]
    fn decode_accepts_exponent_notation() {
        assert_eq!(decode("1e-6"), Ok(1));
        assert_eq!(decode("15E-1"), Ok(1_500_000));
        assert_eq!(decode("1e3"), Ok(1_000_000_000));
    }

    #[test]
    fn decode_rejects_malformed_strings() {
        for bad in ["", "1.2.3", "abc", "1,5", "--1", "1e"] {
            assert!(
                matches!(decode(bad), Err(CoinError::InvalidAmount(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn decode_rejects_negative_values() {
        assert_eq!(decode("-1.000000"), Err(CoinError::NegativeAmount));
        assert_eq!(decode("-0.000001"), Err(CoinError::NegativeAmount));
    }

    #[test]
    fn negative_zero_decodes_as_zero() {
        assert_eq!(decode("-0"), Ok(0));
        assert_eq!(decode("-0.000000"), Ok(0));
    }

    #[test]
    fn decode_rejects_extra_precision() {
        assert_eq!(decode("0.0000001"), Err(CoinError::TooManyDecimals));
        assert_eq!(decode("1.0000015"), Err(CoinError::TooManyDecimals));
        assert_eq!(decode("1e-999999999"), Err(CoinError::TooManyDecimals));
    }

    #[test]
    fn decode_rejects_values_above_i64() {
        assert_eq!(decode("9223372036854.775808"), Err(CoinError::DropletTooLarge));
        assert_eq!(decode("9223372036854.775807"), Ok(MAX_DROPLETS));
        assert_eq!(
            decode("99999999999999999999999"),
            Err(CoinError::DropletTooLarge)
        );
        assert_eq!(decode("1e999999999"), Err(CoinError::DropletTooLarge));
    }

    proptest! {
        #[test]
        fn encoded_amounts_decode_exactly(droplets in 0..=MAX_DROPLETS) {
            let text = encode(droplets).unwrap();
            prop_assert_eq!(decode(&text).unwrap(), droplets);
        }
    }
}

use crate::error::{CoinError, CoinResult};

/// Overflow-checked addition.
pub fn add_u64(a: u64, b: u64) -> CoinResult<u64> {
    a.checked_add(b).ok_or(CoinError::AddOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_within_range() {
        assert_eq!(add_u64(2, 3), Ok(5));
        assert_eq!(add_u64(u64::MAX - 1, 1), Ok(u64::MAX));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(add_u64(u64::MAX, 1), Err(CoinError::AddOverflow));
    }
}

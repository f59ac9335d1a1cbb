use rlv_coin::CoinError;
use rlv_types::Hash256;

/// Receives reports of coin-hour overflows that a reader tolerated.
///
/// Readers stay pure: instead of logging directly they notify the observer
/// they were handed, and the observer decides what to do with the report.
pub trait HoursObserver: Send + Sync {
    /// Calculated hours for `uxid` were forced to 0 because of `reason`.
    fn hours_overflow(&self, uxid: &Hash256, reason: &CoinError);
}

/// Emits a `tracing` warning per report.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl HoursObserver for TracingObserver {
    fn hours_overflow(&self, uxid: &Hash256, reason: &CoinError) {
        tracing::warn!(
            uxid = %uxid,
            reason = %reason,
            "coin hours overflowed; reporting calculated hours as 0"
        );
    }
}

/// Discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl HoursObserver for NoopObserver {
    fn hours_overflow(&self, _uxid: &Hash256, _reason: &CoinError) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every report for assertions.
    #[derive(Default)]
    pub struct RecordingObserver {
        pub reports: Mutex<Vec<(Hash256, CoinError)>>,
    }

    impl RecordingObserver {
        pub fn count(&self) -> usize {
            self.reports.lock().unwrap().len()
        }
    }

    impl HoursObserver for RecordingObserver {
        fn hours_overflow(&self, uxid: &Hash256, reason: &CoinError) {
            self.reports.lock().unwrap().push((*uxid, reason.clone()));
        }
    }
}

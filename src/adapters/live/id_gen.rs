//! Live adapter for the `IdGenerator` port.

use std::sync::atomic::{AtomicU64, Ordering};

use super::clock::LiveClock;
use crate::ports::{Clock, IdGenerator};

/// Timestamp-derived id generator.
///
/// Ids are milliseconds since the Unix epoch, bumped past the previously
/// issued id so that two tasks created within the same millisecond still
/// get distinct, increasing ids.
pub struct LiveIdGenerator<C = LiveClock> {
    clock: C,
    last: AtomicU64,
}

impl LiveIdGenerator {
    /// Creates a generator reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(LiveClock)
    }
}

impl<C: Clock> LiveIdGenerator<C> {
    /// Creates a generator reading timestamps from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: AtomicU64::new(0) }
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> IdGenerator for LiveIdGenerator<C> {
    fn next_id(&self) -> u64 {
        let now = self.clock.now_millis();
        let mut issued = now;
        // fetch_update retries until no other caller raced us.
        let _ = self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            issued = now.max(last.saturating_add(1));
            Some(issued)
        });
        issued
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    struct Frozen(DateTime<Utc>);

    impl Clock for Frozen {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn same_millisecond_ids_are_strictly_increasing() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let gen = LiveIdGenerator::with_clock(Frozen(instant));

        let ids: Vec<u64> = (0..3).map(|_| gen.next_id()).collect();

        let base = 1_718_447_400_000;
        assert_eq!(ids, [base, base + 1, base + 2]);
    }

    #[test]
    fn rapid_ids_are_strictly_increasing() {
        let gen = LiveIdGenerator::new();
        let ids: Vec<u64> = (0..1000).map(|_| gen.next_id()).collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ids_start_at_current_timestamp() {
        let before = LiveClock.now_millis();
        let id = LiveIdGenerator::new().next_id();
        assert!(id >= before);
    }
}

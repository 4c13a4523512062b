//! Counting id generator for deterministic runs.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::IdGenerator;

/// Hands out `start`, `start + 1`, `start + 2`, ...
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `start`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self { next: AtomicU64::new(start) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

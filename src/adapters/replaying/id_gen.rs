//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::IdGenerator;

/// Replays recorded task ids from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying id generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn next_id(&self) -> u64 {
        next_output(&self.replayer, "id_gen", "next_id")
            .as_u64()
            .expect("id_gen::next_id: expected unsigned integer output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer;
    use serde_json::json;

    #[test]
    fn serves_ids_in_order() {
        let gen = ReplayingIdGenerator::new(replayer(
            "id_gen",
            "next_id",
            vec![json!(1_700_000_000_000_u64), json!(1_700_000_000_001_u64)],
        ));
        assert_eq!(gen.next_id(), 1_700_000_000_000);
        assert_eq!(gen.next_id(), 1_700_000_000_001);
    }
}

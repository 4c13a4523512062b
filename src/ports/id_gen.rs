//! ID generator port for new task identifiers.

/// Generates numeric task identifiers.
///
/// Implementations should hand out strictly increasing values within a
/// process; the task store still guards against clashes with ids it
/// already holds.
pub trait IdGenerator: Send + Sync {
    /// Returns the next candidate id.
    fn next_id(&self) -> u64;
}

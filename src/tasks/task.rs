//! Task records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric task identifier, derived from the creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId).map_err(|e| format!("invalid task id `{s}`: {e}"))
    }
}

/// A to-do item.
///
/// Stored as `{"id": number, "title": string, "description": string,
/// "completed": boolean}`. Title and description are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identity, unique within a collection.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
}

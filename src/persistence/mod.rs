//! Task persistence over the key-value store.
//!
//! The whole collection lives under one key as a JSON array and is
//! rewritten on every change. Failures here never reach the user: a corrupt
//! or unreadable value loads as an empty list, and a failed write is logged
//! while the in-memory store stays authoritative.

use log::{error, warn};

use crate::context::ServiceContext;
use crate::tasks::Task;

/// Storage key holding the JSON task array.
pub const TASKS_KEY: &str = "tasks";

/// Loads and saves the task collection through `ctx.kv`.
pub struct TaskPersistence<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskPersistence<'a> {
    /// Creates an adapter over the context's key-value store.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reads the stored collection.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the value is not a
    /// JSON task array.
    pub fn read(&self) -> Result<Option<Vec<Task>>, String> {
        let Some(raw) = self
            .ctx
            .kv
            .get(TASKS_KEY)
            .map_err(|e| format!("Failed to read `{TASKS_KEY}`: {e}"))?
        else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| format!("Failed to parse `{TASKS_KEY}`: {e}"))
    }

    /// Loads the collection, falling back to an empty list.
    ///
    /// Read and parse failures are logged and recovered from.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        match self.read() {
            Ok(tasks) => tasks.unwrap_or_default(),
            Err(err) => {
                warn!("event=tasks_load status=recovered reason={err:?}");
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection.
    ///
    /// Returns `false` if the write failed; the failure is logged.
    pub fn save(&self, tasks: &[Task]) -> bool {
        let result = serde_json::to_string(tasks)
            .map_err(|e| e.to_string())
            .and_then(|json| self.ctx.kv.set(TASKS_KEY, &json).map_err(|e| e.to_string()));
        match result {
            Ok(()) => true,
            Err(err) => {
                error!("event=tasks_save status=failed count={} reason={err:?}", tasks.len());
                false
            }
        }
    }
}

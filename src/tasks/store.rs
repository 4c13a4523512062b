//! In-memory task store and the mutations applied to it.
//!
//! The store is the single source of truth for what the user sees. Every
//! mutation is synchronous and total: bad input and unknown ids are no-ops,
//! never errors. Each mutation reports the [`Notice`] to show and whether
//! the collection changed, so the caller knows when to persist.

use log::debug;

use super::notice::Notice;
use super::task::{Task, TaskId};
use crate::ports::IdGenerator;

/// Result of one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Outcome {
    /// Message to surface to the user.
    pub notice: Notice,
    /// Whether the task collection was modified.
    pub changed: bool,
}

impl Outcome {
    fn new(notice: Notice, changed: bool) -> Self {
        Self { notice, changed }
    }
}

/// Ordered task collection, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a store from a persisted collection, keeping its order.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The first task with the given id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adds a task at the front of the list.
    ///
    /// Both fields are trimmed; if either ends up empty nothing is added and
    /// the notice asks the user to fill in both fields. The id comes from
    /// `ids`, bumped past any id already in the store.
    pub fn add(&mut self, ids: &dyn IdGenerator, title: &str, description: &str) -> Outcome {
        let (title, description) = (title.trim(), description.trim());
        if title.is_empty() || description.is_empty() {
            return Outcome::new(Notice::FillBothFields, false);
        }

        let id = self.free_id(ids.next_id());

        self.tasks.insert(
            0,
            Task {
                id,
                title: title.to_string(),
                description: description.to_string(),
                completed: false,
            },
        );
        debug!("event=task_added id={id} count={}", self.tasks.len());
        Outcome::new(Notice::TaskAdded, true)
    }

    /// The first id at or above `candidate` that no task uses. Past
    /// `u64::MAX` the search wraps to the lowest free id.
    fn free_id(&self, candidate: u64) -> TaskId {
        let taken = |id: u64| self.get(TaskId(id)).is_some();
        let mut id = candidate;
        while taken(id) {
            match id.checked_add(1) {
                Some(next) => id = next,
                None => {
                    id = 0;
                    while taken(id) {
                        id += 1;
                    }
                    break;
                }
            }
        }
        TaskId(id)
    }

    /// Flips `completed` on the task with `id`.
    ///
    /// The status notice is reported even when no task matches.
    pub fn toggle_complete(&mut self, id: TaskId) -> Outcome {
        let changed = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => {
                debug!("event=task_toggle_missing id={id}");
                false
            }
        };
        Outcome::new(Notice::StatusUpdated, changed)
    }

    /// Replaces the title and description of the task with `id`.
    ///
    /// Values are trimmed. Blank values are rejected with no notice and no
    /// change. Otherwise the update notice is reported even when no task
    /// matches.
    pub fn edit(&mut self, id: TaskId, title: &str, description: &str) -> Outcome {
        let (title, description) = (title.trim(), description.trim());
        if title.is_empty() || description.is_empty() {
            return Outcome::new(Notice::None, false);
        }

        let changed = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                title.clone_into(&mut task.title);
                description.clone_into(&mut task.description);
                true
            }
            None => {
                debug!("event=task_edit_missing id={id}");
                false
            }
        };
        Outcome::new(Notice::TaskUpdated, changed)
    }

    /// Removes every task with `id`.
    ///
    /// Callers reach this only through the delete confirmation gate.
    pub fn delete(&mut self, id: TaskId) -> Outcome {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        Outcome::new(Notice::TaskDeleted, self.tasks.len() != before)
    }
}

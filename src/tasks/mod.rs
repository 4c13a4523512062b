//! Task model, the in-memory task store and its mutation API.

pub mod notice;
pub mod store;
pub mod task;

pub use notice::Notice;
pub use store::{Outcome, TaskStore};
pub use task::{Task, TaskId};

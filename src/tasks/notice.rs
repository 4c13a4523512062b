//! User-facing notices emitted by task mutations.

/// What a mutation asks the notification channel to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Nothing to show.
    None,
    /// `add` was given a blank title or description.
    FillBothFields,
    /// A task was added.
    TaskAdded,
    /// A completion toggle was requested.
    StatusUpdated,
    /// An edit was requested.
    TaskUpdated,
    /// A task was deleted.
    TaskDeleted,
}

impl Notice {
    /// The text shown to the user, or `None` for [`Notice::None`].
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::FillBothFields => Some("Please fill in both fields"),
            Self::TaskAdded => Some("Task Added"),
            Self::StatusUpdated => Some("Task status updated"),
            Self::TaskUpdated => Some("Task updated"),
            Self::TaskDeleted => Some("Task deleted"),
        }
    }
}

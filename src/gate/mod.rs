//! Yes/no confirmation in front of destructive actions.
//!
//! A gate is `Hidden` until something asks for confirmation, `Visible` while
//! the prompt is up, and `Hidden` again after the user confirms or cancels.
//! The subject of the request (the task to delete, say) travels with the
//! gate, so a confirmation can only act on what was actually requested.

/// Prompt shown before deleting a task.
pub const DELETE_TASK_PROMPT: &str = "Are you sure you want to delete this task?";
/// Prompt shown before logging out.
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Whether a gate is showing and what it is guarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState<T> {
    /// No prompt is showing.
    Hidden,
    /// The prompt is showing for this subject.
    Visible(T),
}

/// A confirmation prompt guarding an action on a subject of type `T`.
#[derive(Debug, Clone)]
pub struct ConfirmationGate<T> {
    prompt: &'static str,
    state: GateState<T>,
}

impl<T> ConfirmationGate<T> {
    /// Creates a hidden gate with the given prompt text.
    #[must_use]
    pub fn new(prompt: &'static str) -> Self {
        Self { prompt, state: GateState::Hidden }
    }

    /// The question put to the user.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GateState<T> {
        &self.state
    }

    /// Whether the prompt is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.state, GateState::Visible(_))
    }

    /// The pending subject, if the prompt is showing.
    #[must_use]
    pub fn subject(&self) -> Option<&T> {
        match &self.state {
            GateState::Visible(subject) => Some(subject),
            GateState::Hidden => None,
        }
    }

    /// Shows the prompt for `subject`, replacing any pending request.
    pub fn request(&mut self, subject: T) {
        self.state = GateState::Visible(subject);
    }

    /// Hides the gate and hands back the subject to act on.
    ///
    /// Returns `None` when no request is pending.
    #[must_use]
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, GateState::Hidden) {
            GateState::Visible(subject) => Some(subject),
            GateState::Hidden => None,
        }
    }

    /// Confirms and runs `action` on the subject, if a request was pending.
    pub fn confirm_with<R>(&mut self, action: impl FnOnce(T) -> R) -> Option<R> {
        self.confirm().map(action)
    }

    /// Hides the gate and drops the pending subject without acting.
    pub fn cancel(&mut self) {
        self.state = GateState::Hidden;
    }
}

/// A user's reply to a gate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Go ahead.
    Yes,
    /// Back out.
    No,
}

impl Answer {
    /// Interprets a line of terminal input.
    ///
    /// Only `y`/`yes` confirm. Anything else, including an empty line,
    /// `esc`, or end of input (`None`), cancels.
    #[must_use]
    pub fn parse(line: Option<&str>) -> Self {
        match line.map(|l| l.trim().to_ascii_lowercase()) {
            Some(reply) if reply == "y" || reply == "yes" => Self::Yes,
            _ => Self::No,
        }
    }
}

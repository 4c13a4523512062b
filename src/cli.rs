//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::tasks::TaskId;

/// Top-level CLI parser for `taskdeck`.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Keep a task list and log in to the task API")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exchange credentials for session tokens.
    Login {
        /// Account username.
        username: String,
        /// Account password. Read from stdin when omitted.
        password: Option<String>,
    },
    /// Remove the stored session tokens.
    Logout {
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Add a task to the top of the list.
    Add {
        /// Task title.
        title: String,
        /// Task description.
        description: String,
    },
    /// Show all tasks.
    List,
    /// Toggle a task between done and not done.
    Complete {
        /// Id of the task.
        id: TaskId,
    },
    /// Replace a task's title and description.
    Edit {
        /// Id of the task.
        id: TaskId,
        /// New title.
        title: String,
        /// New description.
        description: String,
    },
    /// Delete a task.
    Delete {
        /// Id of the task.
        id: TaskId,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show login state, task counts and configuration.
    Status,
    /// Work with the list interactively.
    Shell,
}

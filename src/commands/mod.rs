//! Command dispatch and handlers.

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod logout;
pub mod shell;
pub mod status;
pub mod terminal;

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncBufRead, BufReader};

pub use terminal::Terminal;

use crate::app::TaskApp;
use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::tasks::Task;

/// Dispatch a parsed command to its handler.
///
/// When `TASKDECK_RECORD` is set to a directory path, all port interactions
/// are recorded to per-port cassette files in that directory.
///
/// # Errors
///
/// Returns an error string if the runtime cannot start or the selected
/// command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    let (ctx, session) = if let Ok(path) = env::var("TASKDECK_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path), config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(config), None)
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;

    let result = runtime.block_on(async {
        let mut term = Terminal::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
        dispatch_with_context(command, &ctx, config, &mut term).await
    });

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context and terminal.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch_with_context<R, W>(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
    term: &mut Terminal<R, W>,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match command {
        Command::Login { username, password } => {
            login::run(ctx, term, username, password.as_deref()).await
        }
        Command::Logout { yes } => logout::run(ctx, config, term, *yes).await,
        Command::Add { title, description } => add::run(ctx, config, term, title, description),
        Command::List => list::run(term, open_app(ctx, config).tasks()),
        Command::Complete { id } => complete::run(ctx, config, term, *id),
        Command::Edit { id, title, description } => {
            edit::run(ctx, config, term, *id, title, description)
        }
        Command::Delete { id, yes } => delete::run(ctx, config, term, *id, *yes).await,
        Command::Status => status::run(ctx, config, term),
        Command::Shell => shell::run(&mut open_app(ctx, config), term).await,
    }
}

/// Opens the task list with the configured notice lifetime.
fn open_app<'a>(ctx: &'a ServiceContext, config: &Config) -> TaskApp<'a> {
    TaskApp::open(ctx, Duration::from_millis(config.notice_ttl_ms))
}

/// Prints the notice currently on screen, if any.
fn report<R, W>(term: &mut Terminal<R, W>, app: &TaskApp<'_>) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match app.notice() {
        Some(notice) => term.say(notice),
        None => Ok(()),
    }
}

/// One-line rendering of a task.
fn task_line(task: &Task) -> String {
    let done = if task.completed { "[x]" } else { "[ ]" };
    format!("{}  {done}  {}: {}", task.id, task.title, task.description)
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

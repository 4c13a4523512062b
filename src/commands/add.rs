//! `taskdeck add` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::{open_app, report, task_line, Terminal};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::tasks::Notice;

/// Execute the `add` command.
///
/// Prints the notice and the new task's row.
///
/// # Errors
///
/// Returns the notice text when either field is blank, or an error string
/// if output cannot be written.
pub fn run<R, W>(
    ctx: &ServiceContext,
    config: &Config,
    term: &mut Terminal<R, W>,
    title: &str,
    description: &str,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = open_app(ctx, config);
    let notice = app.add(title, description);
    if notice == Notice::FillBothFields {
        return Err(app.notice().unwrap_or_default());
    }

    report(term, &app)?;
    if let Some(task) = app.tasks().first() {
        term.say(task_line(task))?;
    }
    Ok(())
}

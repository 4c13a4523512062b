//! `taskdeck delete` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::{open_app, report, task_line, Terminal};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::gate::Answer;
use crate::tasks::TaskId;

/// Execute the `delete` command.
///
/// Asks for confirmation on the terminal unless `yes` is set. Anything but
/// an explicit yes leaves the list untouched.
///
/// # Errors
///
/// Returns an error string if the terminal cannot be read or written.
pub async fn run<R, W>(
    ctx: &ServiceContext,
    config: &Config,
    term: &mut Terminal<R, W>,
    id: TaskId,
    yes: bool,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = open_app(ctx, config);
    app.request_delete(id);

    if !yes {
        if let Some(task) = app.task(id) {
            term.say(task_line(task))?;
        }
        let prompt = app.delete_gate().prompt();
        if term.confirm(prompt).await? == Answer::No {
            app.cancel_delete();
            return term.say("Delete cancelled.");
        }
    }

    let _ = app.confirm_delete();
    report(term, &app)
}

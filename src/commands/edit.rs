//! `taskdeck edit` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::{open_app, report, Terminal};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::tasks::TaskId;

/// Execute the `edit` command.
///
/// Blank values leave the task untouched and print nothing.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run<R, W>(
    ctx: &ServiceContext,
    config: &Config,
    term: &mut Terminal<R, W>,
    id: TaskId,
    title: &str,
    description: &str,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = open_app(ctx, config);
    let _ = app.edit(id, title, description);
    report(term, &app)
}

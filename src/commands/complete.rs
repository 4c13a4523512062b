//! `taskdeck complete` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::{open_app, report, Terminal};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::tasks::TaskId;

/// Execute the `complete` command, toggling the task's completion.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run<R, W>(
    ctx: &ServiceContext,
    config: &Config,
    term: &mut Terminal<R, W>,
    id: TaskId,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = open_app(ctx, config);
    let _ = app.toggle_complete(id);
    report(term, &app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::terminal::test_support::{scripted, transcript};
    use crate::persistence::TaskPersistence;
    use crate::tasks::Task;

    #[test]
    fn toggles_stored_task() {
        let ctx = ServiceContext::in_memory();
        let task = Task { id: TaskId(3), title: "t".into(), description: "d".into(), completed: false };
        assert!(TaskPersistence::new(&ctx).save(&[task]));
        let mut term = scripted("");

        run(&ctx, &Config::default(), &mut term, TaskId(3)).unwrap();

        assert_eq!(transcript(term), "Task status updated\n");
        assert!(TaskPersistence::new(&ctx).load()[0].completed);
    }

    #[test]
    fn unknown_id_still_reports_status() {
        let ctx = ServiceContext::in_memory();
        let mut term = scripted("");

        run(&ctx, &Config::default(), &mut term, TaskId(404)).unwrap();

        assert_eq!(transcript(term), "Task status updated\n");
    }
}

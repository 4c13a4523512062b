//! `taskdeck list` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::Terminal;
use crate::tasks::Task;

/// Execute the `list` command over an already-open task list.
///
/// Prints a table of ID, DONE, TITLE and DESCRIPTION, newest first, followed
/// by a one-line summary.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run<R, W>(term: &mut Terminal<R, W>, tasks: &[Task]) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if tasks.is_empty() {
        return term.say("No tasks yet.");
    }

    let rows: Vec<(String, &str, &str, &str)> = tasks
        .iter()
        .map(|t| {
            let done = if t.completed { "[x]" } else { "[ ]" };
            (t.id.to_string(), done, t.title.as_str(), t.description.as_str())
        })
        .collect();

    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let title_width = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(5).max(5);

    term.say(format!("{:<id_width$}  DONE  {:<title_width$}  DESCRIPTION", "ID", "TITLE"))?;
    term.say(format!("{:-<id_width$}  ----  {:-<title_width$}  -----------", "", ""))?;
    for (id, done, title, description) in &rows {
        term.say(format!("{id:<id_width$}  {done:<4}  {title:<title_width$}  {description}"))?;
    }

    let completed = tasks.iter().filter(|t| t.completed).count();
    term.say(format!("\n{} task(s), {completed} done.", tasks.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::terminal::test_support::{scripted, transcript};
    use crate::tasks::TaskId;

    #[test]
    fn empty_list() {
        let mut term = scripted("");
        run(&mut term, &[]).unwrap();
        assert_eq!(transcript(term), "No tasks yet.\n");
    }

    #[test]
    fn table_keeps_display_order() {
        let tasks = [
            Task { id: TaskId(20), title: "Newer".into(), description: "b".into(), completed: true },
            Task { id: TaskId(3), title: "Old".into(), description: "a".into(), completed: false },
        ];
        let mut term = scripted("");

        run(&mut term, &tasks).unwrap();

        let out = transcript(term);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  DONE  TITLE  DESCRIPTION");
        assert_eq!(lines[2], "20  [x]   Newer  b");
        assert_eq!(lines[3], "3   [ ]   Old    a");
        assert_eq!(lines[5], "2 task(s), 1 done.");
    }
}

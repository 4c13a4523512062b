//! `taskdeck shell` command: an interactive session over one task list.
//!
//! Notices are shown as they happen. `list` also shows the current notice
//! while its timer has not yet dismissed it.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::{list, report, Terminal};
use crate::app::TaskApp;
use crate::gate::Answer;
use crate::tasks::TaskId;

const HELP: &str = "\
Commands:
  add <title> | <description>        add a task
  edit <id> <title> | <description>  replace a task's text
  complete <id>                      toggle done / not done
  delete <id>                        delete a task (asks first)
  list                               show all tasks
  dismiss                            clear the current notice
  logout                             remove the stored session (asks first)
  help                               show this help
  quit                               leave the shell";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Add { title: String, description: String },
    Edit { id: TaskId, title: String, description: String },
    Complete(TaskId),
    Delete(TaskId),
    List,
    Dismiss,
    Logout,
    Help,
    Quit,
    Blank,
}

fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let id = |raw: &str| raw.parse::<TaskId>();
    let pair = |raw: &str| -> Result<(String, String), String> {
        let (title, description) = raw
            .split_once('|')
            .ok_or_else(|| "Separate title and description with `|`.".to_string())?;
        Ok((title.trim().to_string(), description.trim().to_string()))
    };

    Ok(match verb {
        "" => ShellCommand::Blank,
        "add" => {
            let (title, description) = pair(rest)?;
            ShellCommand::Add { title, description }
        }
        "edit" => {
            let (raw_id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let (title, description) = pair(text)?;
            ShellCommand::Edit { id: id(raw_id)?, title, description }
        }
        "complete" | "toggle" => ShellCommand::Complete(id(rest)?),
        "delete" | "rm" => ShellCommand::Delete(id(rest)?),
        "list" | "ls" => ShellCommand::List,
        "dismiss" => ShellCommand::Dismiss,
        "logout" => ShellCommand::Logout,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("Unknown command `{other}`. Type `help` for a list.")),
    })
}

/// Execute the `shell` command until `quit` or end of input.
///
/// # Errors
///
/// Returns an error string if the terminal cannot be read or written.
pub async fn run<R, W>(app: &mut TaskApp<'_>, term: &mut Terminal<R, W>) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    term.say("taskdeck shell. Type `help` for commands.")?;

    while let Some(line) = term.ask("taskdeck> ").await? {
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                term.say(err)?;
                continue;
            }
        };

        match command {
            ShellCommand::Blank => {}
            ShellCommand::Add { title, description } => {
                let _ = app.add(&title, &description);
                report(term, app)?;
            }
            ShellCommand::Edit { id, title, description } => {
                let _ = app.edit(id, &title, &description);
                report(term, app)?;
            }
            ShellCommand::Complete(id) => {
                let _ = app.toggle_complete(id);
                report(term, app)?;
            }
            ShellCommand::Delete(id) => {
                app.request_delete(id);
                if term.confirm(app.delete_gate().prompt()).await? == Answer::Yes {
                    let _ = app.confirm_delete();
                    report(term, app)?;
                } else {
                    app.cancel_delete();
                }
            }
            ShellCommand::List => {
                if let Some(notice) = app.notice() {
                    term.say(format!("* {notice}"))?;
                }
                list::run(term, app.tasks())?;
            }
            ShellCommand::Dismiss => app.dismiss_notice(),
            ShellCommand::Logout => {
                app.request_logout();
                if term.confirm(app.logout_gate().prompt()).await? == Answer::Yes {
                    if app.confirm_logout() {
                        term.say("Logged out.")?;
                        return Ok(());
                    }
                    term.say("Failed to remove session tokens.")?;
                } else {
                    app.cancel_logout();
                }
            }
            ShellCommand::Help => term.say(HELP)?,
            ShellCommand::Quit => return Ok(()),
        }
    }
    Ok(())
}

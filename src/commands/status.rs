//! `taskdeck status` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::Terminal;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::persistence::TaskPersistence;
use crate::session::SessionTokens;

/// Execute the `status` command.
///
/// Reports whether a session is stored, how many tasks exist and the
/// effective configuration.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run<R, W>(ctx: &ServiceContext, config: &Config, term: &mut Terminal<R, W>) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let logged_in = SessionTokens::new(ctx).is_logged_in();
    let tasks = TaskPersistence::new(ctx).load();
    let completed = tasks.iter().filter(|t| t.completed).count();

    let rows = [
        ("Logged in:", if logged_in { "yes".to_string() } else { "no".to_string() }),
        ("Tasks:", format!("{} ({completed} done)", tasks.len())),
        ("API URL:", config.api_url.clone()),
        ("Storage:", config.store_path.display().to_string()),
        ("Notice TTL:", format!("{} ms", config.notice_ttl_ms)),
    ];
    for (label, value) in rows {
        term.say(format!("{label:<12}{value}"))?;
    }
    Ok(())
}

//! `taskdeck login` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::Terminal;
use crate::context::ServiceContext;
use crate::session;

/// Execute the `login` command.
///
/// Without a `password` argument the password is read as one line from the
/// terminal, keeping it out of shell history and process listings.
///
/// # Errors
///
/// Returns the user-facing failure message when the login is rejected or
/// fails, or an error string if no password is given or the terminal cannot
/// be read or written.
pub async fn run<R, W>(
    ctx: &ServiceContext,
    term: &mut Terminal<R, W>,
    username: &str,
    password: Option<&str>,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let password = match password {
        Some(password) => password.to_string(),
        None => term.ask("Password: ").await?.ok_or("No password given.")?,
    };

    session::login(ctx, username, &password)
        .await
        .map_err(|err| err.user_message().to_string())?;
    term.say(format!("Logged in as {username}. Run `taskdeck list` to see your tasks."))
}

//! `taskdeck logout` command.

use std::io::Write;

use tokio::io::AsyncBufRead;

use super::{open_app, Terminal};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::gate::Answer;
use crate::session::SessionTokens;

/// Execute the `logout` command.
///
/// Asks for confirmation unless `yes` is set.
///
/// # Errors
///
/// Returns an error string if the tokens cannot be removed or the terminal
/// cannot be read or written.
pub async fn run<R, W>(
    ctx: &ServiceContext,
    config: &Config,
    term: &mut Terminal<R, W>,
    yes: bool,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if !SessionTokens::new(ctx).is_logged_in() {
        return term.say("Not logged in.");
    }

    let mut app = open_app(ctx, config);
    app.request_logout();
    if !yes && term.confirm(app.logout_gate().prompt()).await? == Answer::No {
        app.cancel_logout();
        return term.say("Logout cancelled.");
    }

    if !app.confirm_logout() {
        return Err("Failed to remove session tokens".to_string());
    }
    term.say("Logged out.")
}

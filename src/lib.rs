//! Core library entry for the `taskdeck` CLI.
//!
//! A single-user task list kept in local storage, plus a login flow that
//! trades a username and password for bearer tokens.

pub mod adapters;
pub mod app;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod gate;
pub mod logging;
pub mod notify;
pub mod persistence;
pub mod ports;
pub mod session;
pub mod tasks;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Help and version requests print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration, logger
/// startup, or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| format!("Failed to write output: {e}"));
        }
        Err(err) => return Err(err.to_string()),
    };

    let config = config::Config::load()?;
    logging::init_logging(&config.log_level)?;
    commands::dispatch(&cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_prints_help() {
        assert!(run(["taskdeck", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["taskdeck", "unknown"]);
        assert!(result.is_err());
    }
}

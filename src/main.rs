//! Binary entrypoint for the `taskdeck` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    // Recording is handled in commands::dispatch via TASKDECK_RECORD=<dir>.
    match taskdeck::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

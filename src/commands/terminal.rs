//! Line-oriented terminal used by the command handlers.
//!
//! Input is read asynchronously so notice timers keep running while the
//! user is typing. Output goes to any `Write`, which tests swap for a
//! `Vec<u8>`.

use std::fmt::Display;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::gate::Answer;

/// Paired input reader and output writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Wraps an input reader and an output writer.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl Display) -> Result<(), String> {
        writeln!(self.output, "{line}").map_err(|e| format!("Failed to write output: {e}"))
    }

    /// Writes `prompt` without a newline and reads the reply.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or input cannot be read.
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.output, "{prompt}")
            .and_then(|()| self.output.flush())
            .map_err(|e| format!("Failed to write output: {e}"))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .map_err(|e| format!("Failed to read input: {e}"))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Puts a yes/no question to the user. Defaults to no.
    ///
    /// # Errors
    ///
    /// Same as [`Terminal::ask`].
    pub async fn confirm(&mut self, question: &str) -> Result<Answer, String> {
        let reply = self.ask(&format!("{question} [y/N] ")).await?;
        Ok(Answer::parse(reply.as_deref()))
    }

    /// Consumes the terminal, returning the output writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{scripted, transcript};
    use super::*;

    #[tokio::test]
    async fn ask_strips_line_ending_and_reports_eof() {
        let mut term = scripted("hello\r\n");
        assert_eq!(term.ask("> ").await.unwrap().as_deref(), Some("hello"));
        assert_eq!(term.ask("> ").await.unwrap(), None);
        assert_eq!(transcript(term), "> > ");
    }

    #[tokio::test]
    async fn confirm_defaults_to_no() {
        let mut term = scripted("\ny\n");
        assert_eq!(term.confirm("Sure?").await.unwrap(), Answer::No);
        assert_eq!(term.confirm("Sure?").await.unwrap(), Answer::Yes);
        assert_eq!(term.confirm("Sure?").await.unwrap(), Answer::No);
        assert_eq!(transcript(term), "Sure? [y/N] ".repeat(3));
    }
}

//! Line-oriented interactive input
//!
//! Input is hidden when it comes from a terminal. Piped input is read
//! verbatim without prompts so stderr stays clean in scripts.

use std::io::{self, BufRead, StdinLock};

use zeroize::Zeroizing;

use crate::error::Result;

/// Reads trimmed lines of secret input, one prompt per line
pub struct LineReader<R> {
    inner: R,
    hidden: bool,
}

impl LineReader<StdinLock<'static>> {
    /// Reader over stdin, hidden when stdin is a TTY
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), atty::is(atty::Stream::Stdin))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader; `hidden` reads from the terminal without echo instead of `inner`
    pub fn new(inner: R, hidden: bool) -> Self {
        Self { inner, hidden }
    }

    /// Reads one line, trimmed
    ///
    /// # Errors
    /// Returns an error if reading fails or input ends before a line is read
    pub fn read_line(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        let line = if self.hidden {
            Zeroizing::new(rpassword::prompt_password(prompt)?)
        } else {
            let mut line = Zeroizing::new(String::new());
            if self.inner.read_line(&mut *line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a line was entered",
                )
                .into());
            }
            line
        };

        Ok(Zeroizing::new(line.trim().to_string()))
    }

    /// Reads the mnemonic to split
    ///
    /// # Errors
    /// Returns an error if the line cannot be read
    pub fn read_mnemonic(&mut self) -> Result<Zeroizing<String>> {
        self.read_line("Enter your BIP-39 mnemonic (seed phrase): ")
    }

    /// Reads shares, one per line, until an empty line
    ///
    /// # Errors
    /// Returns an error if a line cannot be read, including end of input
    /// before the terminating empty line
    pub fn read_shares(&mut self) -> Result<Vec<String>> {
        let mut shares = Vec::new();

        loop {
            let prompt = format!(
                "Enter part {} and press ENTER (leave empty to finish): ",
                shares.len() + 1
            );
            let share = self.read_line(&prompt)?;

            // Empty line signals we're done
            if share.is_empty() {
                break;
            }
            shares.push(share.as_str().to_owned());
        }

        Ok(shares)
    }
}

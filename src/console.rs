//! Line-based console used by every interactive flow.
//!
//! Generic over its reader and writer so a whole session can be scripted
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{Result, SessionError};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Read one line without its line terminator.
    ///
    /// Returns `SessionError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let len = buf.trim_end_matches(&['\n', '\r'][..]).len();
        buf.truncate(len);
        Ok(buf)
    }

    /// Print a prompt line, then read the reply.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.read_line()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

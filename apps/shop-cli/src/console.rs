//! # Console Abstraction
//!
//! Line-oriented input/output behind a trait, so the menu loop can run
//! against stdin/stdout or an in-memory script.
//!
//! ```text
//! ┌──────────────┐   read_line / write / write_line   ┌──────────────────┐
//! │   Session    │ ─────────────────────────────────► │ impl Console     │
//! │  (commands)  │                                    │  TextConsole<R,W>│
//! └──────────────┘                                    └──────────────────┘
//!                                                       stdin + stdout
//!                                                       Cursor + Vec<u8>
//! ```

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Interactive text input/output.
pub trait Console {
    /// Reads one line without its trailing newline. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes text without a newline and flushes (used for prompts).
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TextConsole { input, output }
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        TextConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

//! Line-oriented console I/O.
//!
//! Generic over reader and writer so the CLI can be driven from memory in tests.

use std::io::{self, BufRead, Stdout, Write};

use crate::error::Result;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `prompt` without a newline, then read one line.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Read a single line with its line terminator removed.
    ///
    /// End of input yields an empty string. Invalid UTF-8 is replaced with
    /// U+FFFD rather than failing the read.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            tracing::debug!("Input closed before a line was read");
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

//! Output channel for command replies.
//!
//! Every reply is line-shaped: a bare value, `OK`, `BUSY` or
//! `ERROR: <message>`, each terminated by [`NEWLINE`]. Writes never fail from
//! the dispatcher's point of view; a sink that cannot keep up drops output.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::config::shell::NEWLINE;

/// Sink for shell replies.
pub trait Output {
    /// Write raw text without a terminator.
    fn write_string(&mut self, text: &str);

    /// Write an unsigned integer in decimal.
    fn write_int(&mut self, n: u32) {
        let mut digits = [0u8; 10];
        let mut pos = digits.len();
        let mut n = n;
        loop {
            pos -= 1;
            digits[pos] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        // Only ASCII digits were written.
        if let Ok(text) = core::str::from_utf8(&digits[pos..]) {
            self.write_string(text);
        }
    }

    fn newline(&mut self) {
        self.write_string(NEWLINE);
    }

    /// Write a whole `ERROR: <message>` line.
    fn error(&mut self, message: &str) {
        self.write_string("ERROR: ");
        self.write_string(message);
        self.newline();
    }

    fn ok(&mut self) {
        self.write_string("OK");
        self.newline();
    }

    fn busy(&mut self) {
        self.write_string("BUSY");
        self.newline();
    }

    /// Write a full line.
    fn line(&mut self, text: &str) {
        self.write_string(text);
        self.newline();
    }
}

/// Collects replies in memory.
///
/// Used by tests and by callers that forward a whole reply at once.
#[derive(Debug, Default, Clone)]
pub struct BufferOutput {
    buffer: String,
}

impl BufferOutput {
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Iterate over non-blank reply lines, terminators stripped.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer
            .split_terminator(NEWLINE)
            .filter(|line| !line.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the collected text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Output for BufferOutput {
    fn write_string(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Adapts any `core::fmt::Write` (a UART driver, a `String`) into an
/// [`Output`].
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriterOutput<W> {
    fn write_string(&mut self, text: &str) {
        let _ = self.writer.write_str(text);
    }
}

impl<W: Write> fmt::Debug for WriterOutput<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterOutput").finish_non_exhaustive()
    }
}

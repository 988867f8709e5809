//! TTY line editor.
//!
//! Turns the byte stream from a serial line into command lines: echoes
//! input, handles backspace and Up/Down history navigation, and dispatches
//! each finished line to a [`CommandRegistry`].
//!
//! The editor owns no I/O. The UART receive path (interrupt or polled) calls
//! [`Tty::push_byte`] for every byte; echo and replies go to the [`Output`]
//! passed in. When input can arrive from more than one context, put the
//! `Tty` behind a [`crate::hal::Mutex`].

use alloc::string::String;

use crate::config::shell::{MAX_LINE_LEN, PROMPT};
use crate::console::Output;
use crate::shell::commands::SharedHistory;
use crate::shell::{CommandRegistry, Dispatched};

/// ANSI escape sequence state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EscapeState {
    Normal,
    Escape,  // Got ESC (0x1B)
    Bracket, // Got ESC [
}

pub struct Tty {
    line: String,
    esc_state: EscapeState,
    history: SharedHistory,
    echo: bool,
    /// Last byte was `\r`; a following `\n` belongs to the same Enter.
    after_cr: bool,
}

impl Tty {
    pub fn new(history: SharedHistory) -> Self {
        Self {
            line: String::new(),
            esc_state: EscapeState::Normal,
            history,
            echo: true,
            after_cr: false,
        }
    }

    /// Disable local echo (for terminals that echo themselves).
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// The line being edited.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn prompt(&self, out: &mut dyn Output) {
        out.write_string(PROMPT);
    }

    /// Feed one received byte.
    ///
    /// Returns the dispatch outcome when the byte completed a line.
    pub fn push_byte(
        &mut self,
        c: u8,
        registry: &CommandRegistry,
        out: &mut dyn Output,
    ) -> Option<Dispatched> {
        let after_cr = core::mem::replace(&mut self.after_cr, c == b'\r');

        match self.esc_state {
            EscapeState::Normal => match c {
                0x1B => {
                    self.esc_state = EscapeState::Escape;
                    None
                }
                b'\n' if after_cr => None,
                b'\r' | b'\n' => Some(self.finish_line(registry, out)),
                8 | 127 => {
                    if self.line.pop().is_some() && self.echo {
                        // Move cursor back, overwrite with space, move back again
                        out.write_string("\x08 \x08");
                    }
                    None
                }
                c if c.is_ascii_graphic() || c == b' ' => {
                    self.history.lock().reset_navigation();
                    if self.line.len() < MAX_LINE_LEN {
                        self.line.push(c as char);
                        if self.echo {
                            let mut buf = [0u8; 4];
                            out.write_string((c as char).encode_utf8(&mut buf));
                        }
                    }
                    None
                }
                // Other control characters are dropped
                _ => None,
            },
            EscapeState::Escape => {
                self.esc_state = if c == b'[' {
                    EscapeState::Bracket
                } else {
                    EscapeState::Normal
                };
                None
            }
            EscapeState::Bracket => {
                self.esc_state = EscapeState::Normal;
                match c {
                    b'A' => self.history_prev(out),
                    b'B' => self.history_next(out),
                    // Left/right and unknown sequences are ignored
                    _ => {}
                }
                None
            }
        }
    }

    /// Feed a whole buffer, returning how many lines were dispatched.
    pub fn push_bytes(
        &mut self,
        bytes: &[u8],
        registry: &CommandRegistry,
        out: &mut dyn Output,
    ) -> usize {
        let mut dispatched = 0;
        for &c in bytes {
            if self.push_byte(c, registry, out).is_some() {
                dispatched += 1;
            }
        }
        dispatched
    }

    fn finish_line(&mut self, registry: &CommandRegistry, out: &mut dyn Output) -> Dispatched {
        if self.echo {
            out.newline();
        }

        let line = core::mem::take(&mut self.line);
        let trimmed = line.trim();
        {
            let mut history = self.history.lock();
            history.push(trimmed);
            history.reset_navigation();
        }

        let outcome = registry.dispatch(trimmed, out);
        self.prompt(out);
        outcome
    }

    fn history_prev(&mut self, out: &mut dyn Output) {
        let prev = self.history.lock().prev(&self.line).map(String::from);
        if let Some(prev) = prev {
            self.replace_line(prev, out);
        }
    }

    fn history_next(&mut self, out: &mut dyn Output) {
        let next = self.history.lock().next().map(String::from);
        if let Some(next) = next {
            self.replace_line(next, out);
        }
    }

    /// Clear current line on terminal and redraw with new content.
    fn replace_line(&mut self, new_line: String, out: &mut dyn Output) {
        if self.echo {
            let old_len = self.line.len();
            for erase in ["\x08", " ", "\x08"] {
                for _ in 0..old_len {
                    out.write_string(erase);
                }
            }
            out.write_string(&new_line);
        }
        self.line = new_line;
    }
}

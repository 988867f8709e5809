use std::io::{self, Write};

use burstshell::console::Output;

/// Shell replies written straight to stdout.
pub struct StdoutOutput {
    stdout: io::Stdout,
}

impl StdoutOutput {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Output for StdoutOutput {
    fn write_string(&mut self, text: &str) {
        let mut lock = self.stdout.lock();
        if lock.write_all(text.as_bytes()).is_ok() {
            let _ = lock.flush();
        }
    }
}

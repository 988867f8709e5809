//! Command history management and history command.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::config::shell::MAX_HISTORY;
use crate::console::Output;
use crate::error::{ShellError, ShellResult};
use crate::hal::Mutex;
use crate::shell::{Command, CommandContext};

/// History shared between the tty (which records lines) and the `history`
/// command (which lists and clears them).
pub type SharedHistory = Arc<Mutex<CommandHistory>>;

/// Bounded list of dispatched lines plus the Up/Down recall cursor.
#[derive(Debug)]
pub struct CommandHistory {
    lines: VecDeque<String>,
    capacity: usize,
    /// Steps back from the newest line while recalling, `None` while editing.
    recall: Option<usize>,
    /// Partly typed line that Down returns to.
    draft: String,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Empty history holding up to `MAX_HISTORY` lines.
    pub const fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
            recall: None,
            draft: String::new(),
        }
    }

    pub fn shared() -> SharedHistory {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Record a dispatched line. Blank lines and immediate repeats are
    /// dropped; the oldest line goes once `capacity` is reached.
    pub fn push(&mut self, line: &str) {
        let repeat = self.lines.back().is_some_and(|last| last == line);
        if !line.is_empty() && !repeat {
            self.lines.push_back(line.to_string());
            if self.lines.len() > self.capacity {
                self.lines.pop_front();
            }
        }
        self.reset_navigation();
    }

    /// Leave recall mode and forget the draft.
    pub fn reset_navigation(&mut self) {
        self.recall = None;
        self.draft.clear();
    }

    /// Up arrow: one line further back, stopping at the oldest. The first
    /// step saves `current` as the draft.
    pub fn prev(&mut self, current: &str) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let back = match self.recall {
            Some(back) => (back + 1).min(self.lines.len()),
            None => {
                self.draft = current.to_string();
                1
            }
        };
        self.recall = Some(back);
        self.lines.get(self.lines.len() - back).map(String::as_str)
    }

    /// Down arrow: one line newer, ending on the draft. `None` outside
    /// recall mode.
    pub fn next(&mut self) -> Option<&str> {
        let back = self.recall?;
        if back > 1 {
            self.recall = Some(back - 1);
            return self.lines.get(self.lines.len() + 1 - back).map(String::as_str);
        }
        self.recall = Some(0);
        Some(&self.draft)
    }

    /// Recorded lines, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.reset_navigation();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// History command implementation.
pub struct HistoryCommand {
    history: SharedHistory,
}

impl HistoryCommand {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }
}

impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> &str {
        "Show command history"
    }

    fn usage(&self) -> &str {
        "Usage: history [clear]\r\n\
         \r\n\
         Without arguments: shows all command history.\r\n\
         With 'clear': clears the history.\r\n\
         \r\n\
         Use Up/Down arrow keys to navigate history."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, out: &mut dyn Output) -> ShellResult<()> {
        match ctx.read_param() {
            Some(arg) if arg.eq_ignore_ascii_case("clear") => {
                self.history.lock().clear();
                out.ok();
            }
            Some(_) => {
                anyhow::bail!(ShellError::InvalidArgument("Usage: history [clear]"));
            }
            None => {
                let history = self.history.lock();
                if history.is_empty() {
                    out.line("No command history.");
                } else {
                    for (i, cmd) in history.entries().enumerate() {
                        out.line(&alloc::format!("  {:3}  {}", i + 1, cmd));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferOutput;
    use crate::shell::CommandRegistry;

    #[test]
    fn test_push_skips_empty_and_repeats() {
        let mut history = CommandHistory::new();
        history.push("");
        history.push("burst on");
        history.push("burst on");
        history.push("burst off");
        history.push("burst on");
        let entries: alloc::vec::Vec<&str> = history.entries().collect();
        assert_eq!(entries, ["burst on", "burst off", "burst on"]);
    }

    #[test]
    fn test_bounded() {
        let mut history = CommandHistory::with_capacity(2);
        history.push("a");
        history.push("b");
        history.push("c");
        let entries: alloc::vec::Vec<&str> = history.entries().collect();
        assert_eq!(entries, ["b", "c"]);
    }

    #[test]
    fn test_navigation_restores_edited_line() {
        let mut history = CommandHistory::new();
        history.push("burst frames 5");
        history.push("burst on");

        assert_eq!(history.prev("bur"), Some("burst on"));
        assert_eq!(history.prev("ignored"), Some("burst frames 5"));
        assert_eq!(history.prev("ignored"), Some("burst frames 5"));
        assert_eq!(history.next(), Some("burst on"));
        assert_eq!(history.next(), Some("bur"));
        assert_eq!(history.next(), Some("bur"));
    }

    #[test]
    fn test_push_ends_recall() {
        let mut history = CommandHistory::new();
        history.push("burst on");
        assert_eq!(history.prev("draft"), Some("burst on"));
        history.push("burst off");
        assert_eq!(history.next(), None);
        assert_eq!(history.prev(""), Some("burst off"));
        assert_eq!(history.next(), Some(""));
        assert_eq!(history.prev(""), Some("burst off"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = CommandHistory::with_capacity(0);
        history.push("burst");
        assert!(history.is_empty());
        assert_eq!(history.prev(""), None);
    }

    #[test]
    fn test_next_without_navigation() {
        let mut history = CommandHistory::new();
        history.push("help");
        assert_eq!(history.next(), None);
        assert_eq!(CommandHistory::new().prev("x"), None);
    }

    #[test]
    fn test_history_command() {
        let history = CommandHistory::shared();
        let mut registry = CommandRegistry::new();
        registry.register(HistoryCommand::new(history.clone())).unwrap();
        let mut out = BufferOutput::new();

        registry.dispatch("history", &mut out);
        assert_eq!(out.take(), "No command history.\r\n");

        history.lock().push("burst on");
        history.lock().push("history");
        registry.dispatch("history", &mut out);
        assert_eq!(out.take(), "    1  burst on\r\n    2  history\r\n");

        registry.dispatch("history bogus", &mut out);
        assert_eq!(out.take(), "ERROR: Usage: history [clear]\r\n");

        registry.dispatch("history CLEAR", &mut out);
        assert_eq!(out.take(), "OK\r\n");
        assert!(history.lock().is_empty());
    }
}

//! Line protocol and camera defaults.

/// Line terminator written after every reply line.
pub const NEWLINE: &str = "\r\n";
/// Prompt printed by the tty after each dispatched line.
pub const PROMPT: &str = "> ";

pub const MAX_LINE_LEN: usize = 128; // bytes, extra input is dropped
pub const MAX_HISTORY: usize = 32;

pub const DEFAULT_BURST_FRAMES: u16 = 3;
pub const DEFAULT_BURST_INTERVAL_MS: u16 = 1000;

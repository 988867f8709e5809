//! Logger implementation for the log crate.
//!
//! Records are formatted as `[file:line] message`, colored by level, and
//! handed to a sink installed by the firmware (usually the debug UART).

use alloc::format;
use core::fmt::{self, Display};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::ShellResult;
use crate::hal::Mutex;

/// Receives one fully formatted log line, terminator included.
pub type LogSink = fn(&str);

static SINK: Mutex<Option<LogSink>> = Mutex::new(None);

pub struct SimpleLogger;

static LOGGER: SimpleLogger = SimpleLogger;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(sink) = *SINK.lock() else {
            return;
        };

        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let color = match record.level() {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        };
        let color_reset = "\u{1B}[0m";

        sink(&format!(
            "[{file}:{line}] {color}{}{color_reset}\r\n",
            record.args()
        ));
    }

    fn flush(&self) {}
}

/// Map the `LOG` build variable to a level filter. Unset or unknown is `Off`.
pub fn level_filter(name: Option<&str>) -> LevelFilter {
    match name {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Replace the sink log lines are written to.
pub fn set_sink(sink: LogSink) {
    *SINK.lock() = Some(sink);
}

/// Initialize the logger.
///
/// The level comes from the `LOG` environment variable at build time.
pub fn init(sink: LogSink) -> ShellResult<()> {
    init_with_level(sink, level_filter(option_env!("LOG")))
}

pub fn init_with_level(sink: LogSink, level: LevelFilter) -> ShellResult<()> {
    set_sink(sink);
    log::set_logger(&LOGGER).map_err(|_| anyhow::anyhow!("logger already initialized"))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    static CAPTURED: Mutex<String> = Mutex::new(String::new());

    fn capture(line: &str) {
        CAPTURED.lock().push_str(line);
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_filter(Some("loud")), LevelFilter::Off);
        assert_eq!(level_filter(None), LevelFilter::Off);
    }

    #[test]
    fn test_records_reach_sink() {
        init_with_level(capture, LevelFilter::Info).unwrap();
        log::info!("burst armed");
        log::debug!("filtered out");

        let captured = CAPTURED.lock();
        assert!(captured.contains("logger.rs:"));
        assert!(captured.contains("\u{1B}[32mburst armed\u{1B}[0m\r\n"));
        assert!(!captured.contains("filtered out"));
    }
}

//! Command implementations.
//!
//! Each command is defined in its own module file.

pub mod burst;
pub mod help;
pub mod history;

pub use burst::BurstCommand;
pub use help::HelpCommand;
pub use history::{CommandHistory, HistoryCommand, SharedHistory};

//! Shell command system.
//!
//! A line is split on whitespace; the first token picks a command from the
//! [`CommandRegistry`] (ignoring ASCII case) and the rest are handed to the
//! command through the forward-only [`CommandContext`].
//!
//! # Architecture
//!
//! - `command.rs` - the `Command` trait, `FnCommand` and the execution context
//! - `params.rs` - token cursor and numeric parameter policies
//! - `registry.rs` - registration, lookup and dispatch
//! - `commands/` - built-in commands
//!
//! # Adding a New Command
//!
//! 1. Create a new file in `commands/` with a struct implementing `Command`
//! 2. Export it from `commands/mod.rs`
//! 3. Register it in [`builtin_registry`] or on your own registry with
//!    `registry.register(MyCommand)`

pub mod command;
pub mod commands;
pub mod params;
pub mod registry;

pub use command::{Command, CommandContext, CommandHandler, FnCommand};
pub use params::{OnInvalid, Params, UintPolicy, param_to_uint};
pub use registry::{CommandRegistry, Dispatched};

use crate::camera::{Camera, SharedCamera};
use crate::error::ShellResult;
use commands::{BurstCommand, HelpCommand, HistoryCommand, SharedHistory};

/// Registry with the shipped commands: `help`, `history` and `burst`.
pub fn builtin_registry<C>(
    camera: Option<SharedCamera<C>>,
    history: SharedHistory,
) -> ShellResult<CommandRegistry>
where
    C: Camera + Send + 'static,
{
    let mut registry = CommandRegistry::new();
    registry.register(HelpCommand)?;
    registry.register(HistoryCommand::new(history))?;
    registry.register(BurstCommand::new(camera))?;
    Ok(registry)
}

//! Command registry - registration, lookup and dispatch.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::console::Output;
use crate::error::{ShellError, ShellResult};
use crate::shell::command::{Command, CommandContext, FnCommand};

/// Outcome of one [`CommandRegistry::dispatch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Blank line, nothing ran.
    Empty,
    /// First token matched no command; one error line was written.
    Unknown,
    /// The handler ran and returned `Ok`.
    Completed,
    /// The handler ran and reported a failure line.
    Failed,
}

/// Ordered set of commands with a case-insensitive name index.
///
/// Built once during start-up, then only read. Dispatch takes `&self`, so a
/// registry shared between input paths only needs an outer lock (see
/// [`crate::hal::Mutex`]) to serialize the output it produces.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    /// Lowercased name or alias -> position in `commands`.
    index: BTreeMap<String, usize>,
}

fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Register a command under its name and aliases.
    ///
    /// Rejects empty names, names containing whitespace and names already
    /// taken by another command in any letter case. A rejected command leaves
    /// the registry untouched.
    pub fn register<C: Command + 'static>(&mut self, command: C) -> ShellResult<()> {
        self.register_boxed(Box::new(command))
    }

    pub fn register_boxed(&mut self, command: Box<dyn Command>) -> ShellResult<()> {
        let mut names: Vec<&str> = Vec::with_capacity(1 + command.aliases().len());
        names.push(command.name());
        for alias in command.aliases() {
            names.push(alias);
        }

        let mut keys: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                anyhow::bail!(ShellError::InvalidName(name.to_string()));
            }
            let key = normalize(name);
            if self.index.contains_key(&key) || keys.contains(&key) {
                anyhow::bail!(ShellError::DuplicateName(name.to_string()));
            }
            keys.push(key);
        }

        let position = self.commands.len();
        for key in keys {
            self.index.insert(key, position);
        }
        info!("registered command '{}'", command.name());
        self.commands.push(command);
        Ok(())
    }

    /// Register a closure as a command.
    pub fn register_fn<F>(&mut self, name: &str, help: &str, handler: F) -> ShellResult<()>
    where
        F: Fn(&mut CommandContext<'_>, &mut dyn Output) -> ShellResult<()> + Send + Sync + 'static,
    {
        self.register(FnCommand::new(name, help, handler))
    }

    /// Find a command by name or alias, ignoring ASCII case.
    pub fn find_command(&self, name: &str) -> Option<&(dyn Command + 'static)> {
        self.index
            .get(&normalize(name))
            .map(|&position| self.commands[position].as_ref())
    }

    /// All commands in registration order.
    pub fn all_commands(&self) -> impl Iterator<Item = &(dyn Command + 'static)> {
        self.commands.iter().map(|cmd| &**cmd)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute a command line.
    ///
    /// Parses the input, finds the matching command and executes it. Any
    /// failure becomes exactly one reply line: `BUSY` for a busy resource,
    /// `ERROR: <message>` otherwise.
    pub fn dispatch(&self, line: &str, out: &mut dyn Output) -> Dispatched {
        let Some(mut ctx) = CommandContext::parse(line, self) else {
            return Dispatched::Empty;
        };

        let Some(cmd) = self.find_command(ctx.command) else {
            warn!("unknown command '{}'", ctx.command);
            out.error(&ShellError::UnknownCommand(ctx.command.to_string()).to_string());
            return Dispatched::Unknown;
        };

        debug!("dispatch '{}' -> {}", ctx.raw, cmd.name());
        match cmd.execute(&mut ctx, out) {
            Ok(()) => Dispatched::Completed,
            Err(err) => {
                debug!("'{}' failed: {}", cmd.name(), err);
                report(&err, out);
                Dispatched::Failed
            }
        }
    }
}

fn report(err: &anyhow::Error, out: &mut dyn Output) {
    match ShellError::kind_of(err) {
        Some(ShellError::Busy) => out.busy(),
        _ => {
            let message = alloc::format!("{}", err);
            out.error(&message);
        }
    }
}

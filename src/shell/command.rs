//! Command trait and context definitions.

use alloc::boxed::Box;
use alloc::string::String;

use crate::console::Output;
use crate::error::ShellResult;
use crate::shell::params::{Params, param_to_uint};
use crate::shell::registry::CommandRegistry;

/// Command execution context.
///
/// Lives for exactly one dispatch call.
pub struct CommandContext<'a> {
    /// The input line, trimmed.
    pub raw: &'a str,
    /// The command token as typed (original case).
    pub command: &'a str,
    /// Everything after the command token.
    pub args_raw: &'a str,
    params: Params<'a>,
    registry: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    /// Split a line into command token and parameters.
    ///
    /// Returns `None` for an empty or whitespace-only line.
    pub fn parse(line: &'a str, registry: &'a CommandRegistry) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (command, args_raw) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (line, ""),
        };

        Some(Self {
            raw: line,
            command,
            args_raw,
            params: Params::new(args_raw),
            registry,
        })
    }

    /// Next parameter token, `None` once exhausted.
    pub fn read_param(&mut self) -> Option<&'a str> {
        self.params.read_param()
    }

    /// Soft numeric conversion; see [`param_to_uint`].
    pub fn param_to_uint(&self, token: &str) -> Option<u32> {
        param_to_uint(token)
    }

    /// The registry this command was dispatched from.
    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }
}

/// Trait for implementing commands.
///
/// Commands are registered on a [`CommandRegistry`] and looked up by name or
/// alias, ignoring ASCII case.
pub trait Command: Send + Sync {
    /// Primary command name.
    fn name(&self) -> &str;

    /// Alternative names for this command.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Short description (shown in help list).
    fn description(&self) -> &str;

    /// Detailed usage information (shown in `help <command>`).
    fn usage(&self) -> &str {
        self.description()
    }

    /// Command category for grouping in help.
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the command with the given context.
    ///
    /// Errors are turned into a single reply line by the dispatcher.
    fn execute(&self, ctx: &mut CommandContext<'_>, out: &mut dyn Output) -> ShellResult<()>;
}

/// Boxed handler signature accepted by [`FnCommand`].
pub type CommandHandler =
    Box<dyn Fn(&mut CommandContext<'_>, &mut dyn Output) -> ShellResult<()> + Send + Sync>;

/// Command built from a name, a help text and a closure.
pub struct FnCommand {
    name: String,
    help: String,
    handler: CommandHandler,
}

impl FnCommand {
    pub fn new<F>(name: impl Into<String>, help: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut CommandContext<'_>, &mut dyn Output) -> ShellResult<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            help: help.into(),
            handler: Box::new(handler),
        }
    }
}

impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        self.help.lines().next().unwrap_or("").trim()
    }

    fn usage(&self) -> &str {
        &self.help
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, out: &mut dyn Output) -> ShellResult<()> {
        (self.handler)(ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_command_and_args() {
        let registry = CommandRegistry::new();
        let mut ctx = CommandContext::parse("  burst\tframes   5 ", &registry).unwrap();
        assert_eq!(ctx.raw, "burst\tframes   5");
        assert_eq!(ctx.command, "burst");
        assert_eq!(ctx.args_raw, "frames   5");
        assert_eq!(ctx.read_param(), Some("frames"));
        assert_eq!(ctx.read_param(), Some("5"));
        assert_eq!(ctx.read_param(), None);
    }

    #[test]
    fn test_parse_command_without_args() {
        let registry = CommandRegistry::new();
        let mut ctx = CommandContext::parse("help", &registry).unwrap();
        assert_eq!(ctx.command, "help");
        assert_eq!(ctx.args_raw, "");
        assert_eq!(ctx.read_param(), None);
    }

    #[test]
    fn test_context_param_to_uint() {
        let registry = CommandRegistry::new();
        let mut ctx = CommandContext::parse("led blink 250 fast 4294967296", &registry).unwrap();
        assert_eq!(ctx.read_param(), Some("blink"));
        let period = ctx.read_param().and_then(|token| ctx.param_to_uint(token));
        assert_eq!(period, Some(250));
        let mode = ctx.read_param().and_then(|token| ctx.param_to_uint(token));
        assert_eq!(mode, None);
        let big = ctx.read_param().and_then(|token| ctx.param_to_uint(token));
        assert_eq!(big, Some(u32::MAX));
    }

    #[test]
    fn test_parse_empty() {
        let registry = CommandRegistry::new();
        assert!(CommandContext::parse("", &registry).is_none());
        assert!(CommandContext::parse(" \t \r\n", &registry).is_none());
    }

    #[test]
    fn test_fn_command_description_is_first_help_line() {
        let cmd = FnCommand::new(
            "led",
            "\tled <on|off>: Switch the status LED.\r\n\tled: Show LED state.\r\n",
            |_, _| Ok(()),
        );
        assert_eq!(cmd.description(), "led <on|off>: Switch the status LED.");
        assert!(cmd.usage().contains("Show LED state."));
    }
}

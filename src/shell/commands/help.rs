//! Help command - displays available commands and their usage.

use alloc::vec::Vec;

use crate::console::Output;
use crate::error::{ShellError, ShellResult};
use crate::shell::{Command, CommandContext, CommandRegistry};

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&'static str] {
        &["?"]
    }

    fn description(&self) -> &str {
        "Show available commands or help for a specific command"
    }

    fn usage(&self) -> &str {
        "Usage: help [command]\r\n\
         \r\n\
         Without arguments: lists all available commands.\r\n\
         With a command name: shows detailed help for that command."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, out: &mut dyn Output) -> ShellResult<()> {
        let registry = ctx.registry();
        if let Some(cmd_name) = ctx.read_param() {
            show_command_help(registry, cmd_name, out)
        } else {
            show_all_commands(registry, out);
            Ok(())
        }
    }
}

fn show_command_help(
    registry: &CommandRegistry,
    name: &str,
    out: &mut dyn Output,
) -> ShellResult<()> {
    let Some(cmd) = registry.find_command(name) else {
        anyhow::bail!(ShellError::UnknownCommand(name.into()));
    };

    out.write_string("Command: ");
    out.write_string(cmd.name());
    let aliases = cmd.aliases();
    if !aliases.is_empty() {
        out.write_string(" (aliases: ");
        for (i, alias) in aliases.iter().enumerate() {
            if i > 0 {
                out.write_string(", ");
            }
            out.write_string(alias);
        }
        out.write_string(")");
    }
    out.newline();

    // Usage texts carry their own terminators.
    let usage = cmd.usage();
    out.write_string(usage);
    if !usage.ends_with('\n') {
        out.newline();
    }
    Ok(())
}

fn show_all_commands(registry: &CommandRegistry, out: &mut dyn Output) {
    out.line("Available commands:");
    out.newline();

    // Collect unique categories
    let mut categories: Vec<&str> = Vec::new();
    for cmd in registry.all_commands() {
        let cat = cmd.category();
        if !categories.contains(&cat) {
            categories.push(cat);
        }
    }

    // general first, then alphabetically
    categories.sort_by(|a, b| {
        if *a == "general" {
            core::cmp::Ordering::Less
        } else if *b == "general" {
            core::cmp::Ordering::Greater
        } else {
            a.cmp(b)
        }
    });

    for category in categories {
        out.line(&alloc::format!("[{}]", category));
        for cmd in registry.all_commands().filter(|cmd| cmd.category() == category) {
            out.line(&alloc::format!("  {:12} - {}", cmd.name(), cmd.description()));
        }
        out.newline();
    }

    out.line("Type 'help <command>' for detailed usage.");
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::console::BufferOutput;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(HelpCommand).unwrap();
        registry
            .register_fn("zoom", "zoom <level>: Set zoom.", |_, _| Ok(()))
            .unwrap();
        registry
            .register_fn("exposure", "exposure <us>: Set exposure.", |_, _| Ok(()))
            .unwrap();
        registry
    }

    fn run(registry: &CommandRegistry, line: &str) -> String {
        let mut out = BufferOutput::new();
        registry.dispatch(line, &mut out);
        out.take()
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let text = run(&registry(), "help");
        let help = text.find("  help").unwrap();
        let zoom = text.find("  zoom").unwrap();
        let exposure = text.find("  exposure").unwrap();
        assert!(help < zoom && zoom < exposure);
        assert!(text.starts_with("Available commands:\r\n\r\n[general]\r\n"));
        assert!(text.ends_with("Type 'help <command>' for detailed usage.\r\n"));
    }

    #[test]
    fn test_detail_by_alias_and_case() {
        let registry = registry();
        let text = run(&registry, "? ZOOM");
        assert_eq!(text, "Command: zoom\r\nzoom <level>: Set zoom.\r\n");

        let text = run(&registry, "HELP help");
        assert!(text.starts_with("Command: help (aliases: ?)\r\nUsage: help [command]"));
    }

    #[test]
    fn test_unknown_topic() {
        assert_eq!(
            run(&registry(), "help focus"),
            "ERROR: Unknown command: focus\r\n"
        );
    }
}

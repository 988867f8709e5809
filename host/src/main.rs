use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::exit;

use burstshell::camera::{self, CameraState, SimCamera};
use burstshell::console::Output;
use burstshell::shell::commands::{CommandHistory, SharedHistory};
use burstshell::shell::{builtin_registry, CommandRegistry, Dispatched};
use clap::Parser;

mod config;
mod output;
mod utils;

use config::HostConfig;
use output::StdoutOutput;
use utils::{HostError, HostResult};

#[macro_use]
extern crate log;

/// Drive the camera shell from a terminal or a script, against a simulated
/// camera.
#[derive(Parser, Debug)]
#[command(name = "burstshell-host", version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, default_value = "burstshell.toml")]
    config: PathBuf,

    /// Read command lines from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Start with the camera capturing, so every burst command answers BUSY
    #[arg(long)]
    busy: bool,

    /// Do not echo script lines
    #[arg(long)]
    no_echo: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main(Cli::parse()) {
        error!("{}", e);
        exit(1);
    }
}

fn try_main(cli: Cli) -> HostResult<()> {
    let mut config = HostConfig::load(&cli.config)?;
    if cli.no_echo {
        config.echo = false;
    }
    info!("config: {:?}", config);

    let mut sim = SimCamera::new(config.camera.settings());
    if cli.busy {
        sim.set_state(CameraState::Capturing);
    }
    let history = CommandHistory::shared();
    let registry = builtin_registry(Some(camera::shared(sim)), history.clone())
        .map_err(|e| HostError::Shell(e.to_string()))?;

    let mut out = StdoutOutput::new();
    let session = Session {
        registry: &registry,
        history: &history,
        config: &config,
    };
    let stats = match &cli.script {
        Some(path) => {
            info!("running script {}", path.display());
            session.run(BufReader::new(File::open(path)?), &mut out, true)?
        }
        None => session.run(io::stdin().lock(), &mut out, false)?,
    };
    info!(
        "{} lines, {} failed, {} unknown",
        stats.lines, stats.failed, stats.unknown
    );
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Stats {
    lines: usize,
    failed: usize,
    unknown: usize,
}

struct Session<'a> {
    registry: &'a CommandRegistry,
    history: &'a SharedHistory,
    config: &'a HostConfig,
}

impl Session<'_> {
    /// Dispatch every line of `input`. In script mode the prompt and the line
    /// are echoed before the reply; interactively only the prompt is shown.
    fn run<R: BufRead>(&self, input: R, out: &mut dyn Output, script: bool) -> HostResult<Stats> {
        let mut stats = Stats::default();
        if !script {
            out.write_string(&self.config.prompt);
        }
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if script && self.config.echo {
                out.write_string(&self.config.prompt);
                out.line(line);
            }

            self.history.lock().push(line);
            match self.registry.dispatch(line, out) {
                Dispatched::Empty => {}
                Dispatched::Completed => stats.lines += 1,
                Dispatched::Failed => {
                    stats.lines += 1;
                    stats.failed += 1;
                }
                Dispatched::Unknown => {
                    stats.lines += 1;
                    stats.unknown += 1;
                }
            }

            if !script {
                out.write_string(&self.config.prompt);
            }
        }
        Ok(stats)
    }
}

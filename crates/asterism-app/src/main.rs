//! asterism: reveal a constellation outward from its central star.
//!
//! Usage:
//!   # Animate the first constellation in the terminal
//!   cargo run -p asterism-app -- play crates/asterism-app/data/constellations.json
//!
//!   # Headless, one line at a time, draw requests as log events
//!   cargo run -p asterism-app -- play data.json -c "Ursa Major" --reveal sequential --renderer log
//!
//!   # Inspect the breadth-first levels without animating
//!   cargo run -p asterism-app -- schedule data.json -c 1

mod commands;
mod config;
mod log_scene;
mod logging;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use asterism_graph::RevealMode;
use asterism_types::Selector;
use clap::{Args, Parser, Subcommand};

use config::{AppConfig, RendererKind};
use logging::LogTarget;

#[derive(Parser, Debug)]
#[command(name = "asterism")]
#[command(about = "Reveal constellations line by line, outward from their central star")]
struct Cli {
    /// Config file (default: ~/.config/asterism/config.ron)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the constellations in a data document
    List {
        /// Constellation data document (JSON)
        data: PathBuf,
    },
    /// Print the central star and reveal levels as JSON
    Schedule(Target),
    /// Animate a reveal
    Play(PlayArgs),
}

/// Which constellation to process and how.
#[derive(Args, Debug)]
pub struct Target {
    /// Constellation data document (JSON)
    pub data: PathBuf,

    /// Constellation name or zero-based index (default: first)
    #[arg(short, long)]
    pub constellation: Option<Selector>,

    /// breadth-first, sequential, or simultaneous
    #[arg(short, long)]
    pub reveal: Option<RevealMode>,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub target: Target,

    /// Seconds for one line to grow
    #[arg(short, long)]
    pub duration: Option<f32>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Where to draw
    #[arg(long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Seconds to keep the finished constellation on screen
    #[arg(long)]
    pub hold: Option<f32>,
}

fn log_target(command: &Command, config: &AppConfig) -> LogTarget {
    match command {
        Command::Play(args) if args.renderer.unwrap_or(config.renderer) == RendererKind::Terminal => {
            LogTarget::File(config.log_file.clone().unwrap_or_else(logging::default_log_file))
        }
        _ => LogTarget::Stderr,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = config::load_config(cli.config.as_deref())?;
    let _guard = logging::init(&log_target(&cli.command, &config))?;
    source.log();

    match cli.command {
        Command::List { data } => commands::list(&data),
        Command::Schedule(target) => commands::schedule(&target, &config),
        Command::Play(args) => commands::play(&args, &config).await,
    }
}

//! Pursuit CLI - grid pursuit matches in the terminal.
//!
//! - `pursuit play` - play one side against the AI
//! - `pursuit watch` - AI against AI
//! - `pursuit init` - write a starter config

mod render;
mod terminal;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use pursuit_core::AgentKind;
use pursuit_match::{
    Controller, Level, MatchConfig, MatchLoop, NoHuman, Renderer, ScanBlockProvider,
};

use render::TextRenderer;
use terminal::{KeyMoves, PromptBlocks};

const DEFAULT_CONFIG: &str = "pursuit.yaml";

#[derive(Parser)]
#[command(name = "pursuit")]
#[command(about = "Pursuer versus evader on a walled grid", version)]
struct Cli {
    /// Match config file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI
    Play {
        /// Side to control
        #[arg(long = "as", value_enum, default_value_t = Side::Evader)]
        side: Side,

        /// Built-in board; overrides the config file
        #[arg(long, value_enum)]
        level: Option<LevelArg>,

        /// Side that moves first each turn
        #[arg(long, value_enum)]
        first: Option<Side>,
    },

    /// Watch the AI play both sides
    Watch {
        /// Built-in board; overrides the config file
        #[arg(long, value_enum)]
        level: Option<LevelArg>,

        /// Side that moves first each turn
        #[arg(long, value_enum)]
        first: Option<Side>,
    },

    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Pursuer,
    Evader,
}

impl From<Side> for AgentKind {
    fn from(side: Side) -> Self {
        match side {
            Side::Pursuer => AgentKind::Pursuer,
            Side::Evader => AgentKind::Evader,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Easy,
    Medium,
    Hard,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Easy => Level::Easy,
            LevelArg::Medium => Level::Medium,
            LevelArg::Hard => Level::Hard,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    match cli.command {
        Commands::Play { side, level, first } => {
            let config = match_config(&config_path, cli.config.is_some(), level, first)?;
            play(&config, side.into())
        }
        Commands::Watch { level, first } => {
            let config = match_config(&config_path, cli.config.is_some(), level, first)?;
            watch(&config)
        }
        Commands::Init { force } => init_config(&config_path, force),
    }
}

/// Preset if `level` is given, else the config file (required only when named explicitly).
fn match_config(
    path: &Path,
    explicit: bool,
    level: Option<LevelArg>,
    first: Option<Side>,
) -> Result<MatchConfig> {
    let mut config = match level {
        Some(level) => {
            let level = Level::from(level);
            tracing::info!(level = level.name(), "using built-in board");
            level.config()
        }
        None if explicit => MatchConfig::load(path)?,
        None => MatchConfig::load_or_default(path)?,
    };
    if let Some(first) = first {
        config.first_mover = first.into();
    }
    Ok(config)
}

fn play(config: &MatchConfig, side: AgentKind) -> Result<()> {
    let (pursuer, evader) = match side {
        AgentKind::Pursuer => (Controller::Human, Controller::Ai),
        AgentKind::Evader => (Controller::Ai, Controller::Human),
    };
    let mut game = MatchLoop::new(config)?.with_controllers(pursuer, evader);
    tracing::info!(%side, "starting match");

    let mut renderer = TextRenderer::new(io::stdout(), game.max_turns());
    let mut moves = KeyMoves::new(io::stdin(), io::stdout());
    let mut blocks = PromptBlocks::new(io::stdin(), io::stdout());

    println!("You are the {side}. Goal is G.");
    renderer.render(game.state());
    if !game.is_over() {
        game.run(&mut moves, &mut blocks, |state, _| renderer.render(state))?;
    }

    println!("{}", render::outcome_line(game.state().outcome()));
    Ok(())
}

fn watch(config: &MatchConfig) -> Result<()> {
    let mut game = MatchLoop::new(config)?;
    let mut renderer = TextRenderer::new(io::stdout(), game.max_turns());

    renderer.render(game.state());
    if !game.is_over() {
        game.run(&mut NoHuman, &mut ScanBlockProvider, |state, report| {
            if let Some(wall) = report.wall {
                println!("\nStalemate: walled off {wall}");
            }
            renderer.render(state);
        })?;
    }

    println!(
        "{} ({} turns)",
        render::outcome_line(game.state().outcome()),
        game.state().turn()
    );
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(path, MatchConfig::default().to_yaml()?)?;

    println!("Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit size, walls and start positions");
    println!("  2. Run: pursuit --config {} watch", path.display());

    Ok(())
}

//! Two-player terminal Tetris (default binary).
//!
//! Sets up logging, puts the terminal in raw mode and runs the game loop
//! until a player quits or a spawn is blocked. Both endings exit with
//! status 0.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use duel_tetris::core::{DisplayFlags, Session, SessionConfig};
use duel_tetris::engine::{GameLoop, SystemClock};
use duel_tetris::input::{InputDecoder, KeyBindings, TerminalInput};
use duel_tetris::term::{CrosstermSurface, TerminalGuard};
use duel_tetris::types::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Two boards, cleared lines are sent to the opponent
    Versus,
    /// One board with score, levels and faster gravity
    Classic,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Versus => GameMode::Versus,
            ModeArg::Classic => GameMode::Classic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "duel-tetris", about = "Head-to-head Tetris in the terminal")]
struct Cli {
    #[arg(long, help = "Seed for pieces and garbage gaps (default: from the clock)")]
    seed: Option<u32>,

    #[arg(long, value_enum, default_value = "versus", help = "Game mode")]
    mode: ModeArg,

    #[arg(long, help = "Start without colors (toggle with 'c')")]
    no_color: bool,

    #[arg(long, help = "Start with the next-piece preview hidden (toggle with 'n')")]
    no_preview: bool,

    #[arg(long, help = "Start with the help text hidden (toggle with 'h')")]
    no_help: bool,

    #[arg(long, help = "Give each player their own gravity clock")]
    independent_gravity: bool,

    #[arg(long, help = "Write logs to this file (the terminal is busy with the game)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    verbose: u8,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let flags = DisplayFlags {
            help_visible: !self.no_help,
            next_visible: !self.no_preview,
            use_color: !self.no_color,
        };
        SessionConfig::new(self.seed.unwrap_or_else(clock_seed))
            .with_mode(self.mode.into())
            .with_shared_gravity(!self.independent_gravity)
            .with_flags(flags)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(cli.log_level())
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.session_config();
    info!(seed = config.seed, mode = config.mode.as_str(), "starting");

    let guard = TerminalGuard::enter()?;
    let mut game = GameLoop::new(
        Session::new(config),
        InputDecoder::new(KeyBindings::default()),
        TerminalInput::new(),
        SystemClock::new(),
        CrosstermSurface::stdout(),
    );

    match game.run() {
        Ok(status) => {
            guard.finish()?;
            info!(?status, "exiting");
            Ok(())
        }
        Err(err) => {
            // Restores the terminal before the error is printed.
            drop(guard);
            Err(err)
        }
    }
}

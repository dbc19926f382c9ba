//! # cmd-2048
//!
//! Line-based terminal front end. Each input line is one key: `w`/`a`/`s`/`d`
//! to move, an empty line for Enter, `esc`, `space`, and `u`/`i`/`o` for
//! undo, swap and delete.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cmd_2048::{
    render, EngineConfig, Feedback, GameEngine, InputAdapter, Key, LossPolicy, PowerupMode,
};

/// How long an armed pause waits for Escape.
const PAUSE_WINDOW: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "cmd-2048")]
#[command(author, version, about = "Play 2048 with undo, swap and delete powerups")]
struct Args {
    /// Powerup mode: empty for none, `p` for powerups, `p+` for practice
    #[arg(default_value = "")]
    mode: String,

    /// Random seed for a reproducible spawn sequence
    #[arg(short, long)]
    seed: Option<u64>,

    /// Refuse powerups once the game is lost
    #[arg(long)]
    final_loss: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let Some(mode) = PowerupMode::from_token(&args.mode) else {
        bail!("invalid mode {:?}: expected \"\", \"p\" or \"p+\"", args.mode);
    };

    let mut config = EngineConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.final_loss {
        config = config.with_loss_policy(LossPolicy::Final);
    }

    let mut engine = GameEngine::new(config, mode);
    info!(seed = engine.seed(), ?mode, "starting");
    run(&mut engine)
}

fn run(engine: &mut GameEngine) -> Result<()> {
    let mut input = InputAdapter::new();
    let mut armed_at: Option<Instant> = None;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    draw(&mut stdout, engine, &Feedback::Ignored)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;

        let mut notes = Vec::new();
        if armed_at.is_some_and(|at| at.elapsed() > PAUSE_WINDOW) {
            armed_at = None;
            notes.extend(input.disarm_pause());
        }

        let key: Key = match line.parse() {
            Ok(key) => key,
            Err(err) => {
                warn!(%err, "ignoring input");
                continue;
            }
        };

        let feedback = input.handle(engine, key);
        match feedback {
            Feedback::Quit => break,
            Feedback::PauseArmed => armed_at = Some(Instant::now()),
            Feedback::Paused | Feedback::Resumed => armed_at = None,
            _ => {}
        }

        draw(&mut stdout, engine, &feedback)?;
        for note in &notes {
            writeln!(stdout, "{note}")?;
        }
    }

    Ok(())
}

fn draw(out: &mut impl Write, engine: &GameEngine, feedback: &Feedback) -> Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(out, "{}", render(engine.session()))?;
    let message = feedback.to_string();
    if !message.is_empty() {
        writeln!(out, "{message}")?;
    }
    out.flush()?;
    Ok(())
}

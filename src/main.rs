//! Terminal Tetris runner (default binary).
//!
//! Fixed-rate loop: render, poll input until the frame deadline, let the
//! search agent place a piece if it is switched on, then advance the game by
//! the wall-clock time since the previous frame.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use heuristic_tetris::core::{GameConfig, GameState};
use heuristic_tetris::engine::{apply_move, Strategy};
use heuristic_tetris::input::{map_key, InputCommand, KeyContext};
use heuristic_tetris::term::{FrameBuffer, GameView, PanelStatus, TerminalRenderer, Viewport};
use heuristic_tetris::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, TARGET_FPS};

/// Play Tetris in the terminal, optionally handing control to the search agent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u8,

    /// Seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the agent playing (toggle with `i`)
    #[arg(long)]
    ai: bool,

    /// Write logs to this file; nothing is logged otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let config = GameConfig::default().with_size(args.width, args.height);
    let game = GameState::from_config(config, args.seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, args.ai);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, mut ai_enabled: bool) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_secs_f64(1.0 / TARGET_FPS as f64);
    let mut last_update = Instant::now();

    loop {
        let frame_start = Instant::now();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), PanelStatus { ai_enabled }, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let ctx = KeyContext {
                        game_over: game.game_over(),
                        paused: game.paused(),
                    };
                    match map_key(key, ctx) {
                        Some(InputCommand::Quit) => return Ok(()),
                        Some(InputCommand::ToggleAi) => {
                            ai_enabled = !ai_enabled;
                            tracing::info!(ai_enabled, "agent toggled");
                        }
                        Some(cmd) => apply_command(&mut game, cmd),
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if ai_enabled && !game.game_over() && !game.paused() {
            if let Some(mv) = Strategy::Lookahead.choose(&game) {
                if let Err(err) = apply_move(&mut game, &mv) {
                    tracing::warn!(code = err.code(), "agent move rejected: {}", err);
                }
            }
        }

        let now = Instant::now();
        game.update(now.duration_since(last_update).as_secs_f64());
        last_update = now;
    }
}

fn apply_command(game: &mut GameState, cmd: InputCommand) {
    match cmd {
        InputCommand::Queue(action) => game.enqueue_action(action),
        InputCommand::HardDrop => {
            game.hard_drop();
        }
        InputCommand::TogglePause => game.toggle_pause(),
        InputCommand::Restart => game.reset(),
        InputCommand::EndGame => game.end_game(),
        InputCommand::ToggleAi | InputCommand::Quit => {}
    }
}

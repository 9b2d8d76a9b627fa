//! Headless autoplay: let the search agent play a batch of games and report
//! the scores.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::Level;

use heuristic_tetris::core::{GameConfig, GameState};
use heuristic_tetris::engine::autoplay::DEFAULT_TICK_SECS;
use heuristic_tetris::engine::{AutoPlayer, AutoplayReport, Strategy};
use heuristic_tetris::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// autoplay - run the placement agent without a display
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 5)]
    games: u32,

    /// Placement strategy: greedy or lookahead
    #[arg(short, long, default_value = "lookahead", value_parser = parse_strategy)]
    strategy: Strategy,

    /// Stop each game after this many pieces
    #[arg(long)]
    max_pieces: Option<u32>,

    /// Game clock advance per piece, in seconds
    #[arg(long, default_value_t = DEFAULT_TICK_SECS)]
    tick: f64,

    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u8,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every lock and line clear
    #[arg(short, long)]
    verbose: bool,
}

fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    Strategy::from_str(s).ok_or_else(|| format!("unknown strategy '{}' (expected greedy or lookahead)", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if !args.tick.is_finite() || args.tick < 0.0 {
        return Err(anyhow!("--tick must be a non-negative number of seconds"));
    }

    let config = GameConfig::default().with_size(args.width, args.height);
    let game = GameState::from_config(config, args.seed)?;

    let mut player = AutoPlayer::new(game)
        .with_strategy(args.strategy)
        .with_tick(args.tick)
        .with_max_pieces(args.max_pieces);
    let report = player.play_games(args.games);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AutoplayReport) {
    println!("Strategy: {}", report.strategy.as_str());
    for (i, result) in report.results.iter().enumerate() {
        println!(
            "Game {:>3}: score {:>8}  rows {:>6}  pieces {:>6}{}",
            i + 1,
            result.score,
            result.rows,
            result.pieces,
            if result.capped { "  (capped)" } else { "" }
        );
    }
    println!("Games: {}", report.games);
    println!("Total score: {}  Total rows: {}", report.total_score, report.total_rows);
    println!("Average score: {:.2}", report.avg_score);
    println!("Average rows: {:.2}", report.avg_rows);
}

//! Self-play driver
//!
//! Plays the configured AI strategy against a random opponent and logs the
//! evaluation after every move.
//!
//! Usage: `gomoku [config.json] [plies]`

use std::fs;

use anyhow::{Context, Result};
use gomoku::strategy::{Strategy, StrategyFactory, StrategyType};
use gomoku::{evaluate, AIEngine, Cell, StrategyConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_PLIES: usize = 20;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path))?;
            StrategyConfig::load_from_json(&json)
                .with_context(|| format!("invalid config {}", path))?
        }
        None => StrategyConfig::default(),
    };
    let plies = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid ply count {:?}", n))?,
        None => DEFAULT_PLIES,
    };

    let mut board = config.board()?;
    let mut engine = AIEngine::with_config(&config);
    let mut opponent = StrategyFactory::create(StrategyType::Random, &config);

    info!(
        strategy = ?config.strategy,
        rows = board.rows(),
        cols = board.cols(),
        k = board.k(),
        plies,
        "starting self-play"
    );

    let mut who = Cell::Ai;
    for ply in 0..plies {
        let mv = match who {
            Cell::Ai => engine.get_move(&board, who),
            _ => opponent.choose(&board, who).best_move,
        };
        let Some(mv) = mv else {
            info!(ply, "board full");
            break;
        };

        board.place(mv, who)?;
        let score = evaluate(&board, mv);
        info!(ply, ?who, %mv, score, "move");
        who = who.opponent();
    }

    println!("{}", board);
    Ok(())
}

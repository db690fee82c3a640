//! Move selection strategies
//!
//! Contains:
//! - Random: uniform choice among empty cells
//! - DFS: depth-limited minimax with alpha-beta over nearby candidates
//! - MCTS: UCT tree search with short random playouts
//!
//! DFS and MCTS rank moves with a [`Heuristic`]; none of them detect wins,
//! searches are bounded by depth or iteration count only.

pub mod dfs;
pub mod mcts;
pub mod random;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Pos};
use crate::config::StrategyConfig;
use crate::eval::{FreedomHeuristic, Heuristic};

pub use dfs::DfsStrategy;
pub use mcts::MctsStrategy;
pub use random::RandomStrategy;

/// Available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyType {
    Random,
    Dfs,
    Mcts,
}

/// Outcome of a strategy decision
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen move, `None` when the board is full
    pub best_move: Option<Pos>,
    /// AI-positive heuristic value backing the choice (0 when not evaluated)
    pub score: f32,
    /// Positions visited while deciding
    pub nodes: u64,
}

impl SearchResult {
    #[inline]
    fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            nodes: 0,
        }
    }
}

/// A move chooser. Implementations search on their own copy of the board.
pub trait Strategy: Send {
    fn name(&self) -> &'static str;

    /// Pick a move for `who` on `board`
    fn choose(&mut self, board: &Board, who: Cell) -> SearchResult;
}

/// Builds strategies from configuration
pub struct StrategyFactory;

impl StrategyFactory {
    pub fn create(kind: StrategyType, config: &StrategyConfig) -> Box<dyn Strategy> {
        Self::create_with(kind, config, Box::new(FreedomHeuristic::new()))
    }

    /// Same as [`StrategyFactory::create`] with a custom heuristic
    pub fn create_with(
        kind: StrategyType,
        config: &StrategyConfig,
        heuristic: Box<dyn Heuristic>,
    ) -> Box<dyn Strategy> {
        match kind {
            StrategyType::Random => Box::new(RandomStrategy::new(config.seed)),
            StrategyType::Dfs => Box::new(DfsStrategy::new(
                heuristic,
                config.dfs_depth,
                config.dfs_width,
                config.candidate_radius,
            )),
            StrategyType::Mcts => Box::new(MctsStrategy::new(
                heuristic,
                config.mcts_iterations,
                config.mcts_playout_depth,
                config.mcts_exploration,
                config.candidate_radius,
                config.seed,
            )),
        }
    }
}

/// Empty cells within Chebyshev distance `radius` of any piece, in board
/// order. An empty board yields its centre; a full board yields nothing.
/// A radius of 0 is treated as 1.
pub fn candidate_moves(board: &Board, radius: usize) -> Vec<Pos> {
    if board.piece_count() == 0 {
        return vec![Pos::new(board.cols() / 2, board.rows() / 2)];
    }

    let radius = radius.max(1) as isize;
    let mut seen = vec![false; board.rows() * board.cols()];

    for (pos, _) in board.pieces() {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let x = pos.x as isize + dx;
                let y = pos.y as isize + dy;
                if !board.contains(x, y) {
                    continue;
                }
                let p = Pos::new(x as usize, y as usize);
                if board.is_empty(p) {
                    seen[p.y * board.cols() + p.x] = true;
                }
            }
        }
    }

    board.positions().filter(|p| seen[p.y * board.cols() + p.x]).collect()
}

/// Sign that turns an AI-positive score into `who`'s point of view
#[inline]
pub(crate) fn perspective(who: Cell) -> f32 {
    if who == Cell::Ai {
        1.0
    } else {
        -1.0
    }
}

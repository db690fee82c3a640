//! AI engine wrapping a configured strategy
//!
//! The engine owns one [`Strategy`] built by [`StrategyFactory`] and adds
//! timing and logging around each decision.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Cell, Pos, StrategyConfig, StrategyType};
//!
//! let config = StrategyConfig {
//!     strategy: StrategyType::Dfs,
//!     dfs_depth: 2,
//!     ..Default::default()
//! };
//! let mut engine = AIEngine::with_config(&config);
//! let mut board = Board::standard();
//! board.place(Pos::new(7, 7), Cell::Opponent).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Cell::Ai);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Cell, Pos};
use crate::config::StrategyConfig;
use crate::strategy::{Strategy, StrategyFactory, StrategyType};

/// Result of a move search with timing.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// AI-positive score reported by the strategy
    pub score: f32,
    /// Strategy that produced the move
    pub strategy: StrategyType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions searched
    pub nodes: u64,
}

pub struct AIEngine {
    strategy: Box<dyn Strategy>,
    kind: StrategyType,
}

impl AIEngine {
    /// Engine with the default configuration (MCTS)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&StrategyConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &StrategyConfig) -> Self {
        Self {
            strategy: StrategyFactory::create(config.strategy, config),
            kind: config.strategy,
        }
    }

    /// Wrap an already-built strategy
    #[must_use]
    pub fn with_strategy(kind: StrategyType, strategy: Box<dyn Strategy>) -> Self {
        Self { strategy, kind }
    }

    #[inline]
    pub fn strategy(&self) -> StrategyType {
        self.kind
    }

    /// Best move for `who`, or `None` on a full board
    #[must_use]
    pub fn get_move(&mut self, board: &Board, who: Cell) -> Option<Pos> {
        self.get_move_with_stats(board, who).best_move
    }

    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, who: Cell) -> MoveResult {
        let start = Instant::now();
        let result = self.strategy.choose(board, who);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            strategy = self.strategy.name(),
            ?who,
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "engine move"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            strategy: self.kind,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(strategy: StrategyType) -> StrategyConfig {
        StrategyConfig {
            strategy,
            dfs_depth: 2,
            dfs_width: 4,
            mcts_iterations: 100,
            seed: Some(17),
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_every_strategy_moves() {
        let mut board = Board::standard();
        board.place(Pos::new(7, 7), Cell::Opponent).unwrap();

        for kind in [StrategyType::Random, StrategyType::Dfs, StrategyType::Mcts] {
            let mut engine = AIEngine::with_config(&config(kind));
            let result = engine.get_move_with_stats(&board, Cell::Ai);
            let mv = result.best_move.unwrap_or_else(|| panic!("{:?} found no move", kind));
            assert!(board.is_empty(mv), "{:?} picked occupied {}", kind, mv);
            assert_eq!(result.strategy, kind);
        }
    }

    #[test]
    fn test_engine_default_is_mcts() {
        assert_eq!(AIEngine::new().strategy(), StrategyType::Mcts);
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::new(1, 1, 1).unwrap();
        board.place(Pos::new(0, 0), Cell::Ai).unwrap();
        let mut engine = AIEngine::with_config(&config(StrategyType::Random));
        assert_eq!(engine.get_move(&board, Cell::Opponent), None);
    }

    #[test]
    fn test_engine_custom_strategy() {
        let strategy = StrategyFactory::create(StrategyType::Random, &config(StrategyType::Random));
        let mut engine = AIEngine::with_strategy(StrategyType::Random, strategy);
        let board = Board::new(3, 3, 3).unwrap();
        assert!(engine.get_move(&board, Cell::Ai).is_some());
    }
}

//! Strategy and board settings, loadable from JSON
//!
//! Keys missing from a file fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError, STANDARD_K, STANDARD_SIZE};
use crate::strategy::StrategyType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub strategy: StrategyType,

    // Board
    pub rows: usize,
    pub cols: usize,
    pub k: usize,

    // Move generation: empty cells within this Chebyshev radius of a piece
    pub candidate_radius: usize,

    // DFS
    pub dfs_depth: u8,
    pub dfs_width: usize,

    // MCTS
    pub mcts_iterations: u32,
    pub mcts_playout_depth: u8,
    pub mcts_exploration: f32,

    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::Mcts,
            rows: STANDARD_SIZE,
            cols: STANDARD_SIZE,
            k: STANDARD_K,
            candidate_radius: 2,
            dfs_depth: 3,
            dfs_width: 8,
            mcts_iterations: 2_000,
            mcts_playout_depth: 6,
            mcts_exploration: std::f32::consts::SQRT_2,
            seed: None,
        }
    }
}

impl StrategyConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Empty board with the configured dimensions
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.cols, self.k)
    }
}

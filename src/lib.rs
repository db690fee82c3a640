//! Heuristic evaluation engine for Gomoku-style connection games
//!
//! Scores a board position for the AI by combining, per piece and per
//! direction, the length of the line the piece belongs to with the freedom
//! left behind that line. Search strategies rank candidate moves with it.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid storage and 8-directional scanning
//! - [`eval`]: Line metrics and the incremental/full-board evaluators
//! - [`strategy`]: Random, DFS and MCTS move selection
//! - [`engine`]: AI engine wrapping a configured strategy
//! - [`config`]: JSON-loadable strategy and board settings
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{evaluate, Board, Cell, Pos};
//!
//! let mut board = Board::standard();
//! board.place(Pos::new(7, 7), Cell::Ai).unwrap();
//! board.place(Pos::new(8, 7), Cell::Ai).unwrap();
//!
//! // An open AI pair on an otherwise empty board
//! let score = evaluate(&board, Pos::new(8, 7));
//! assert!(score > 0.0);
//! ```
//!
//! # Evaluation modes
//!
//! [`evaluate`] only rescores the pieces in line of sight of the last move
//! and averages per side. [`eval::full_board_eval`] sums every cell instead.
//! The two are deliberately not equivalent.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod strategy;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Cell, Direction, Pos};
pub use config::StrategyConfig;
pub use engine::{AIEngine, MoveResult};
pub use eval::{evaluate, EvalMode, FreedomHeuristic, Heuristic};
pub use strategy::{SearchResult, Strategy, StrategyFactory, StrategyType};

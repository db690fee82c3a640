//! Evaluation module for board positions
//!
//! The score of a position combines, for every scored piece and every
//! direction:
//! - the run length of the line the piece belongs to
//! - the freedom left behind that line (open cells and friendly support)
//!
//! Scores are reported from the AI's side: positive favours the AI.

pub mod freedom;
pub mod heuristic;

pub use freedom::{block_freedom, blocking_cell_score, cell_score, own_freedom, run_length};
pub use heuristic::{
    evaluate, find_affected, full_board_eval, incremental_eval, AffectedPieces, EvalMode,
    FreedomHeuristic, Heuristic,
};

//! Board scoring from the AI's point of view
//!
//! Two aggregation modes share the per-cell score from [`super::freedom`]:
//! - **Incremental** (default): only pieces in line of sight of the last move,
//!   plus the move itself, averaged per side
//! - **Full board**: raw per-cell scores summed over every cell
//!
//! The two modes are not equivalent. Incremental mode is a local, normalized
//! approximation; full-board mode sums raw scores.

use tracing::trace;

use crate::board::{Board, Cell, Direction, Pos};

use super::freedom::cell_score;

/// How [`FreedomHeuristic`] aggregates cell scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalMode {
    /// Score only the pieces the last move can see
    #[default]
    Incremental,
    /// Score every cell of the board
    FullBoard,
}

/// Position evaluator consumed by the search strategies.
///
/// Implementations must not mutate the board. Positive scores favour the
/// AI, negative scores favour the opponent.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, last_move: Pos) -> f32;
}

/// Run-length times freedom heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct FreedomHeuristic {
    mode: EvalMode,
}

impl FreedomHeuristic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: EvalMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }
}

impl Heuristic for FreedomHeuristic {
    fn evaluate(&self, board: &Board, last_move: Pos) -> f32 {
        match self.mode {
            EvalMode::Incremental => incremental_eval(board, last_move),
            EvalMode::FullBoard => full_board_eval(board),
        }
    }
}

/// Evaluate the position reached by `last_move` in incremental mode.
#[must_use]
pub fn evaluate(board: &Board, last_move: Pos) -> f32 {
    incremental_eval(board, last_move)
}

/// Pieces visible from a move, split by owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedPieces {
    pub ai: Vec<Pos>,
    pub opponent: Vec<Pos>,
}

impl AffectedPieces {
    pub fn len(&self) -> usize {
        self.ai.len() + self.opponent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ai.is_empty() && self.opponent.is_empty()
    }
}

/// Nearest piece in each of the 8 directions from `mv`.
///
/// The move's own cell is never included; callers score it separately.
pub fn find_affected(board: &Board, mv: Pos) -> AffectedPieces {
    let mut affected = AffectedPieces::default();

    for dir in Direction::ALL {
        board.scan(mv, dir, |cell, pos, dist| {
            if dist == 0 {
                return true;
            }
            match cell {
                Cell::Empty => true,
                Cell::Ai => {
                    affected.ai.push(pos);
                    false
                }
                Cell::Opponent => {
                    affected.opponent.push(pos);
                    false
                }
            }
        });
    }

    affected
}

/// Sum of `cell_score` over every cell for one side
fn full_board_eval_for(board: &Board, who: Cell) -> f32 {
    board.positions().map(|pos| cell_score(board, pos, who)).sum()
}

/// AI total minus opponent total over the whole board.
pub fn full_board_eval(board: &Board) -> f32 {
    let ai = full_board_eval_for(board, Cell::Ai);
    let oppo = full_board_eval_for(board, Cell::Opponent);
    trace!(ai, oppo, "full board eval");
    ai - oppo
}

/// Mean AI score minus mean opponent score over the pieces affected by `mv`.
///
/// The move's cell joins the side that owns it; a cell that is not an AI
/// piece is scored for the opponent. Each mean divides by at least 1.
pub fn incremental_eval(board: &Board, mv: Pos) -> f32 {
    let affected = find_affected(board, mv);

    let mut n_ai = affected.ai.len();
    let mut n_oppo = affected.opponent.len();

    let mut ai_score: f32 = affected
        .ai
        .iter()
        .map(|&pos| cell_score(board, pos, Cell::Ai))
        .sum();
    let mut oppo_score: f32 = affected
        .opponent
        .iter()
        .map(|&pos| cell_score(board, pos, Cell::Opponent))
        .sum();

    if board.get(mv) == Cell::Ai {
        ai_score += cell_score(board, mv, Cell::Ai);
        n_ai += 1;
    } else {
        oppo_score += cell_score(board, mv, Cell::Opponent);
        n_oppo += 1;
    }

    let n_ai = n_ai.max(1);
    let n_oppo = n_oppo.max(1);

    let p0 = ai_score / n_ai as f32;
    let p1 = oppo_score / n_oppo as f32;
    trace!(%mv, n_ai, n_oppo, p0, p1, "incremental eval");

    p0 - p1
}

//! Line metrics built on directional scans
//!
//! Every metric here is a single [`Board::scan`] with a small predicate:
//! - run length: how many `who` pieces line up from a cell
//! - own freedom: open space and friendly support behind a run
//! - block freedom: how close the nearest opposing piece sits

use crate::board::{Board, Cell, Direction, Pos};

/// Length of the `who` line starting at `pos` and heading along `dir`.
///
/// Counts the `who` pieces that follow the origin, so a lone piece has run
/// length 0. An origin not owned by `who` stops the scan at once.
#[inline]
pub fn run_length(board: &Board, pos: Pos, who: Cell, dir: Direction) -> usize {
    board
        .scan(pos, dir, |cell, _, _| cell == who)
        .saturating_sub(1)
}

/// Freedom available to a run of `run_len` pieces when looking along `dir`.
///
/// Walking away from `pos` (the origin itself is skipped):
/// - each empty cell adds `1 / k` and the walk continues
/// - the first `who` piece adds `run_len / distance` and ends the walk
/// - an opposing piece ends the walk with nothing added
///
/// # Arguments
/// * `k` - Normalization constant, the board's win length (must be non-zero)
pub fn own_freedom(
    board: &Board,
    pos: Pos,
    who: Cell,
    dir: Direction,
    run_len: usize,
    k: usize,
) -> f32 {
    let open_step = 1.0 / k as f32;
    let mut score = 0.0f32;

    board.scan(pos, dir, |cell, _, dist| {
        if dist == 0 {
            return true;
        }
        match cell {
            Cell::Empty => {
                score += open_step;
                true
            }
            c if c == who => {
                score += run_len as f32 / dist as f32;
                false
            }
            _ => false,
        }
    });

    score
}

/// Blocking pressure on a run of `run_len` pieces along `dir`.
///
/// Scans past the origin, empty cells and `who` pieces until the first
/// opposing piece or the edge, then returns `run_len² / distance²`.
pub fn block_freedom(board: &Board, pos: Pos, who: Cell, dir: Direction, run_len: usize) -> f32 {
    let dist = board.scan(pos, dir, |cell, _, dist| {
        dist == 0 || cell == Cell::Empty || cell == who
    });
    // Distance is at least 1 for any on-board origin
    let dist = dist.max(1) as f32;
    let len = run_len as f32;

    1.0 / (dist * dist) * len * len
}

/// Score of a single cell for `who`.
///
/// Sums, over all 8 directions, the run length along `d` multiplied by the
/// freedom found along `d.opposite()`.
pub fn cell_score(board: &Board, pos: Pos, who: Cell) -> f32 {
    let k = board.k();
    let mut score = 0.0f32;

    for dir in Direction::ALL {
        let len = run_length(board, pos, who, dir);
        let alpha = own_freedom(board, pos, who, dir.opposite(), len, k);
        score += alpha * len as f32;
    }

    score
}

/// Cell score using blocking pressure instead of own freedom.
///
/// Not used by [`crate::eval::evaluate`]; kept for analysis of the
/// opposing side's lines.
pub fn blocking_cell_score(board: &Board, pos: Pos, who: Cell) -> f32 {
    Direction::ALL
        .iter()
        .map(|&dir| {
            let len = run_length(board, pos, who, dir);
            block_freedom(board, pos, who, dir.opposite(), len)
        })
        .sum()
}

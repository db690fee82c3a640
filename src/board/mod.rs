//! Board representation for the evaluator
//!
//! The board is a plain row-major grid of [`Cell`]s with a configurable size
//! and win length `k`. Directional scanning is exposed through
//! [`Board::scan`], which walks outward from a cell and hands every visited
//! cell to a caller-supplied closure.

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const STANDARD_SIZE: usize = 15;
/// Default run length needed to win
pub const STANDARD_K: usize = 5;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Ai,
    Opponent,
}

impl Cell {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Ai => Cell::Opponent,
            Cell::Opponent => Cell::Ai,
            Cell::Empty => Cell::Empty,
        }
    }

    /// True for either side's piece
    #[inline]
    pub fn is_piece(self) -> bool {
        self != Cell::Empty
    }
}

/// Position on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// One of the 8 compass directions.
///
/// Discriminants run clockwise starting East, so the opposite of index `d`
/// is always `(d + 4) % 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East = 0,
    SouthEast = 1,
    South = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
    North = 6,
    NorthEast = 7,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, wrapping modulo 8
    #[inline]
    pub fn from_index(idx: usize) -> Direction {
        Self::ALL[idx % 8]
    }

    /// The direction pointing the other way along the same line
    #[inline]
    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 4)
    }

    /// Step as (dx, dy); y grows downwards
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
        }
    }
}

/// Errors reported by board mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Position outside the grid
    OutOfBounds(Pos),
    /// Cell already holds a piece
    Occupied(Pos),
    /// Tried to place `Cell::Empty`
    EmptyPiece,
    /// Zero rows, columns or win length
    InvalidDimensions { rows: usize, cols: usize, k: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(pos) => write!(f, "position {} is off the board", pos),
            BoardError::Occupied(pos) => write!(f, "position {} is already occupied", pos),
            BoardError::EmptyPiece => write!(f, "cannot place an empty cell"),
            BoardError::InvalidDimensions { rows, cols, k } => {
                write!(f, "invalid board dimensions {}x{} with k={}", cols, rows, k)
            }
        }
    }
}

impl std::error::Error for BoardError {}

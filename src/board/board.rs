//! Grid storage and directional scanning

use std::fmt;

use super::{BoardError, Cell, Direction, Pos, STANDARD_K, STANDARD_SIZE};

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Run length that wins; also the open-space normalization constant
    k: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Rejects zero-sized grids and `k == 0`.
    pub fn new(rows: usize, cols: usize, k: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || k == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols, k });
        }
        Ok(Self {
            rows,
            cols,
            k,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Empty 15x15 board with k = 5
    pub fn standard() -> Self {
        Self {
            rows: STANDARD_SIZE,
            cols: STANDARD_SIZE,
            k: STANDARD_K,
            cells: vec![Cell::Empty; STANDARD_SIZE * STANDARD_SIZE],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Check signed coordinates against the grid
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    #[inline]
    fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.y * self.cols + pos.x
    }

    /// Cell at position; anything off the board reads as empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.in_bounds(pos) {
            self.cells[self.index(pos)]
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a piece on an empty cell
    pub fn place(&mut self, pos: Pos, cell: Cell) -> Result<(), BoardError> {
        if cell == Cell::Empty {
            return Err(BoardError::EmptyPiece);
        }
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        let idx = self.index(pos);
        if self.cells[idx] != Cell::Empty {
            return Err(BoardError::Occupied(pos));
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Clear a cell (no-op off the board)
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.cells[idx] = Cell::Empty;
        }
    }

    /// Number of pieces of either side
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_piece()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_piece())
    }

    /// Every position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Pos::new(x, y)))
    }

    /// Empty positions, row by row
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_empty(p))
    }

    /// Occupied positions with their owner, row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.positions()
            .map(move |p| (p, self.get(p)))
            .filter(|(_, c)| c.is_piece())
    }

    /// Walk outward from `origin` along `dir`.
    ///
    /// `visit(cell, pos, distance)` is called for the origin at distance 0 and
    /// then for each following cell. The walk stops at the first cell where
    /// `visit` returns false, or when the next step leaves the board. Returns
    /// the distance reached at that point.
    pub fn scan<F>(&self, origin: Pos, dir: Direction, mut visit: F) -> usize
    where
        F: FnMut(Cell, Pos, usize) -> bool,
    {
        let (dx, dy) = dir.delta();
        let mut x = origin.x as isize;
        let mut y = origin.y as isize;
        let mut dist = 0;

        while self.contains(x, y) {
            let pos = Pos::new(x as usize, y as usize);
            if !visit(self.get(pos), pos, dist) {
                break;
            }
            x += dx;
            y += dy;
            dist += 1;
        }
        dist
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.cols {
            write!(f, "{:2}", x % 100)?;
        }
        writeln!(f)?;

        for y in 0..self.rows {
            write!(f, "{:2} ", y % 100)?;
            for x in 0..self.cols {
                let ch = match self.get(Pos::new(x, y)) {
                    Cell::Ai => " X",
                    Cell::Opponent => " O",
                    Cell::Empty => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

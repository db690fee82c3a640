//! Uniform random move selection

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Cell, Pos};

use super::{SearchResult, Strategy};

/// Plays any empty cell with equal probability
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, board: &Board, who: Cell) -> SearchResult {
        let empty: Vec<Pos> = board.empty_cells().collect();
        let Some(&mv) = empty.choose(&mut self.rng) else {
            return SearchResult::no_move();
        };
        debug!(?who, %mv, choices = empty.len(), "random move");

        SearchResult {
            best_move: Some(mv),
            score: 0.0,
            nodes: 1,
        }
    }
}

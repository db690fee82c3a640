//! Depth-limited minimax with alpha-beta pruning
//!
//! The AI maximises and the opponent minimises the AI-positive heuristic.
//! Leaves are scored by evaluating the last move played. At each node the
//! candidates are ordered by a one-ply evaluation and cut to `width`.

use tracing::debug;

use crate::board::{Board, Cell, Pos};
use crate::eval::Heuristic;

use super::{candidate_moves, perspective, SearchResult, Strategy};

pub struct DfsStrategy {
    heuristic: Box<dyn Heuristic>,
    depth: u8,
    width: usize,
    radius: usize,
    nodes: u64,
}

impl DfsStrategy {
    pub fn new(heuristic: Box<dyn Heuristic>, depth: u8, width: usize, radius: usize) -> Self {
        Self {
            heuristic,
            depth: depth.max(1),
            width: width.max(1),
            radius,
            nodes: 0,
        }
    }

    /// Candidates for `who`, best first by one-ply score, at most `width`
    fn ordered_moves(&mut self, board: &mut Board, who: Cell) -> Vec<Pos> {
        let sign = perspective(who);
        let mut scored: Vec<(Pos, f32)> = Vec::new();

        for mv in candidate_moves(board, self.radius) {
            if board.place(mv, who).is_err() {
                continue;
            }
            self.nodes += 1;
            let score = sign * self.heuristic.evaluate(board, mv);
            board.remove(mv);
            scored.push((mv, score));
        }

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.width);
        scored.into_iter().map(|(mv, _)| mv).collect()
    }

    /// AI-positive value of the position after `last`, `to_move` to play
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        last: Pos,
        to_move: Cell,
        depth: u8,
        mut alpha: f32,
        mut beta: f32,
    ) -> f32 {
        if depth == 0 {
            self.nodes += 1;
            return self.heuristic.evaluate(board, last);
        }

        let moves = self.ordered_moves(board, to_move);
        if moves.is_empty() {
            return self.heuristic.evaluate(board, last);
        }

        let maximizing = to_move == Cell::Ai;
        let mut best = if maximizing { f32::NEG_INFINITY } else { f32::INFINITY };

        for mv in moves {
            if board.place(mv, to_move).is_err() {
                continue;
            }
            let value = self.alpha_beta(board, mv, to_move.opponent(), depth - 1, alpha, beta);
            board.remove(mv);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

impl Strategy for DfsStrategy {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn choose(&mut self, board: &Board, who: Cell) -> SearchResult {
        self.nodes = 0;
        let mut work = board.clone();
        let sign = perspective(who);

        let mut best_move = None;
        let mut best_value = f32::NEG_INFINITY;
        let mut best_score = 0.0;
        let mut alpha = f32::NEG_INFINITY;
        let mut beta = f32::INFINITY;

        for mv in self.ordered_moves(&mut work, who) {
            if work.place(mv, who).is_err() {
                continue;
            }
            let score = self.alpha_beta(&mut work, mv, who.opponent(), self.depth - 1, alpha, beta);
            work.remove(mv);

            // Compare from the mover's side
            if best_move.is_none() || sign * score > best_value {
                best_value = sign * score;
                best_score = score;
                best_move = Some(mv);
                if who == Cell::Ai {
                    alpha = best_score;
                } else {
                    beta = best_score;
                }
            }
        }

        debug!(?who, best = ?best_move, score = best_score, nodes = self.nodes, "dfs search");
        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }
}

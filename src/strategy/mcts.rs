//! Monte-Carlo tree search (UCT)
//!
//! Each iteration selects down the tree by UCB1, expands one untried move,
//! plays a short random playout over nearby candidates and backs up a reward
//! derived from the sign of the heuristic at the playout's last move.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Cell, Pos};
use crate::eval::Heuristic;

use super::{candidate_moves, SearchResult, Strategy};

/// Tree node stored in an arena
#[derive(Debug)]
struct Node {
    /// Move that led here (`None` at the root)
    mv: Option<Pos>,
    /// Side that played `mv`
    mover: Cell,
    parent: Option<usize>,
    children: Vec<usize>,
    untried: Vec<Pos>,
    visits: u32,
    /// Accumulated reward from `mover`'s point of view
    wins: f32,
}

impl Node {
    fn new(mv: Option<Pos>, mover: Cell, parent: Option<usize>, untried: Vec<Pos>) -> Self {
        Self {
            mv,
            mover,
            parent,
            children: Vec::new(),
            untried,
            visits: 0,
            wins: 0.0,
        }
    }

    #[inline]
    fn mean(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f32
        }
    }
}

pub struct MctsStrategy {
    heuristic: Box<dyn Heuristic>,
    iterations: u32,
    playout_depth: u8,
    exploration: f32,
    radius: usize,
    rng: StdRng,
}

impl MctsStrategy {
    pub fn new(
        heuristic: Box<dyn Heuristic>,
        iterations: u32,
        playout_depth: u8,
        exploration: f32,
        radius: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            heuristic,
            iterations: iterations.max(1),
            playout_depth,
            exploration,
            radius,
            rng,
        }
    }

    /// Child of `parent` with the highest UCB1 value
    fn select_child(&self, tree: &[Node], parent: usize) -> usize {
        let ln_n = (tree[parent].visits.max(1) as f32).ln();
        let ucb = |idx: usize| {
            let child = &tree[idx];
            if child.visits == 0 {
                return f32::INFINITY;
            }
            child.mean() + self.exploration * (ln_n / child.visits as f32).sqrt()
        };

        let children = &tree[parent].children;
        let mut best = children[0];
        let mut best_value = ucb(best);
        for &idx in &children[1..] {
            let value = ucb(idx);
            if value > best_value {
                best = idx;
                best_value = value;
            }
        }
        best
    }

    /// Random moves from `board`, `to_move` first. Returns the last move.
    fn playout(
        &mut self,
        board: &mut Board,
        mut to_move: Cell,
        mut last: Option<Pos>,
    ) -> Option<Pos> {
        for _ in 0..self.playout_depth {
            let moves = candidate_moves(board, self.radius);
            let Some(&mv) = moves.choose(&mut self.rng) else {
                break;
            };
            if board.place(mv, to_move).is_err() {
                break;
            }
            last = Some(mv);
            to_move = to_move.opponent();
        }
        last
    }

    /// Reward for the AI: 1 if the heuristic favours it, 0 if not, 0.5 on a tie
    fn ai_reward(&self, board: &Board, last: Option<Pos>) -> f32 {
        let Some(last) = last else {
            return 0.5;
        };
        let score = self.heuristic.evaluate(board, last);
        if score > 0.0 {
            1.0
        } else if score < 0.0 {
            0.0
        } else {
            0.5
        }
    }
}

impl Strategy for MctsStrategy {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn choose(&mut self, board: &Board, who: Cell) -> SearchResult {
        let root_moves = candidate_moves(board, self.radius);
        if root_moves.is_empty() {
            return SearchResult::no_move();
        }

        let mut tree = vec![Node::new(None, who.opponent(), None, root_moves)];
        let mut nodes = 0u64;

        for _ in 0..self.iterations {
            let mut work = board.clone();
            let mut node = 0;
            let mut last = None;

            // Selection
            while tree[node].untried.is_empty() && !tree[node].children.is_empty() {
                node = self.select_child(&tree, node);
                let child = &tree[node];
                if let Some(mv) = child.mv {
                    if work.place(mv, child.mover).is_err() {
                        break;
                    }
                    last = Some(mv);
                }
            }

            // Expansion
            if !tree[node].untried.is_empty() {
                let pick = self.rng.gen_range(0..tree[node].untried.len());
                let mv = tree[node].untried.swap_remove(pick);
                let mover = tree[node].mover.opponent();
                if work.place(mv, mover).is_ok() {
                    let untried = candidate_moves(&work, self.radius);
                    let child = tree.len();
                    tree.push(Node::new(Some(mv), mover, Some(node), untried));
                    tree[node].children.push(child);
                    node = child;
                    last = Some(mv);
                }
            }

            // Playout
            let next = tree[node].mover.opponent();
            last = self.playout(&mut work, next, last);
            let reward = self.ai_reward(&work, last);
            nodes += 1;

            // Backpropagation
            let mut cursor = Some(node);
            while let Some(idx) = cursor {
                let n = &mut tree[idx];
                n.visits += 1;
                n.wins += if n.mover == Cell::Ai { reward } else { 1.0 - reward };
                cursor = n.parent;
            }
        }

        let best = tree[0]
            .children
            .iter()
            .copied()
            .max_by(|&a, &b| {
                tree[a]
                    .visits
                    .cmp(&tree[b].visits)
                    .then(tree[a].mean().total_cmp(&tree[b].mean()))
            });

        let Some(best) = best else {
            return SearchResult::no_move();
        };
        let best_move = tree[best].mv;
        // Win rate mapped onto [-1, 1] from the AI's side
        let ai_rate = if who == Cell::Ai {
            tree[best].mean()
        } else {
            1.0 - tree[best].mean()
        };
        let score = 2.0 * ai_rate - 1.0;

        debug!(
            ?who,
            best = ?best_move,
            visits = tree[best].visits,
            score,
            tree_size = tree.len(),
            "mcts search"
        );
        SearchResult {
            best_move,
            score,
            nodes,
        }
    }
}

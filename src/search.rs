//! A depth-limited adversarial search for the computer's moves

use rayon::prelude::*;

use crate::{
    board::{Board, Player},
    evaluator::evaluate,
    win::check_winner,
};

/// Score of a position the computer has won, negated for a loss
pub const WIN_SCORE: i32 = 1000;

/// Bound of the initial alpha-beta search window
pub const INFINITY: i32 = i32::MAX;

/// An agent choosing moves for one player with minimax and alpha-beta pruning
///
/// # Position Scoring
/// A position where the computer has a completed line scores [`WIN_SCORE`],
/// one where its opponent has scores `-WIN_SCORE`, no matter how deep in the
/// tree it was found. Positions at the depth limit, and full boards, are
/// scored by the static [`evaluate`] heuristic from the computer's side.
///
/// # Move Order
/// Columns are tried in x-major, y-minor order and a later column only
/// replaces the best one on a strictly better score, so ties go to the first
/// column found.
#[derive(Clone, Debug)]
pub struct Searcher {
    ai: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` maximising for `ai`
    pub fn new(ai: Player) -> Self {
        Self { ai, node_count: 0 }
    }

    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Scores `board` looking `depth` plies ahead
    ///
    /// `maximizing` is true when the computer is the next to move. Each child
    /// is searched on its own copy of the board.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if let Some(winner) = check_winner(board) {
            return if winner == self.ai { WIN_SCORE } else { -WIN_SCORE };
        }
        if depth == 0 {
            return evaluate(board, self.ai);
        }

        let mover = if maximizing { self.ai } else { self.ai.other() };
        let mut best: Option<i32> = None;

        for (x, y) in board.open_columns() {
            let mut next = *board;
            if next.play(x, y, mover).is_err() {
                continue;
            }
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
            }
            // the other player will never allow this branch
            if beta <= alpha {
                break;
            }
        }

        // no moves left, score the full board as it stands
        best.unwrap_or_else(|| evaluate(board, self.ai))
    }

    /// Returns the best column for the computer to play and its score
    ///
    /// Each candidate is scored with a `depth`-ply search of the opponent's
    /// replies. Candidates are searched in parallel but the result is the same
    /// as searching them in order. Returns `None` if every column is full.
    pub fn best_move_scored(&mut self, board: &Board, depth: u8) -> Option<((usize, usize), i32)> {
        let ai = self.ai;
        let candidates: Vec<((usize, usize), Board)> = board
            .open_columns()
            .filter_map(|(x, y)| board.with_move(x, y, ai).ok().map(|next| ((x, y), next)))
            .collect();

        let scores: Vec<(i32, usize)> = candidates
            .par_iter()
            .map(|(_, next)| {
                let mut child = Searcher::new(ai);
                let score = child.minimax(next, depth, -INFINITY, INFINITY, false);
                (score, child.node_count)
            })
            .collect();

        let mut best: Option<((usize, usize), i32)> = None;
        for ((column, _), (score, nodes)) in candidates.iter().zip(scores) {
            self.node_count += nodes;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*column, score));
            }
        }

        log::trace!(
            "searched {} nodes at depth {}, best move {:?}",
            self.node_count,
            depth,
            best
        );
        best
    }

    /// Returns the best column for the computer to play, or `None` if every
    /// column is full
    pub fn best_move(&mut self, board: &Board, depth: u8) -> Option<(usize, usize)> {
        self.best_move_scored(board, depth).map(|(column, _)| column)
    }
}

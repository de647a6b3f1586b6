use log::debug;
use web_time::{Duration, Instant};

use crate::ai::eval::evaluate;
use crate::board::Board;
use crate::types::{Color, Coord};

/// Search depth used for the computer's move.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at leaves and at nodes where the side to move has no legal move.
    pub best_move: Option<Coord>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Counters from the most recent [`Searcher::search`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Fixed-depth minimax without pruning.
///
/// `maximizer` is the computer's color: nodes where it moves take the highest
/// child score, every other node takes the lowest. Scores are always the
/// maximizer's disc differential.
pub struct Searcher {
    maximizer: Color,
    nodes: u64,
    start_time: Instant,
    elapsed: Duration,
}

impl Searcher {
    pub fn new(maximizer: Color) -> Self {
        Self {
            maximizer,
            nodes: 0,
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn maximizer(&self) -> Color {
        self.maximizer
    }

    /// Searches `depth` plies with `color` to move.
    ///
    /// Children are explored on one working copy of `board` with make/unmake;
    /// the caller's board is never touched.
    pub fn search(&mut self, board: &Board, depth: u8, color: Color) -> SearchResult {
        self.start_time = Instant::now();
        self.nodes = 0;

        let mut working = *board;
        let result = self.minimax(&mut working, depth, color);
        debug_assert_eq!(working, *board, "make/unmake left the board modified");

        self.elapsed = self.start_time.elapsed();
        debug!(
            "search depth={depth} color={color:?} maximizer={:?} score={} move={:?} nodes={} elapsed={:?}",
            self.maximizer, result.score, result.best_move, self.nodes, self.elapsed
        );

        result
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            elapsed: self.elapsed,
        }
    }

    fn minimax(&mut self, board: &mut Board, depth: u8, color: Color) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(evaluate(board, self.maximizer));
        }

        let maximizing = color == self.maximizer;
        let mut best: Option<(i32, Coord)> = None;

        for coord in Coord::all() {
            if !board.is_legal(coord, color) {
                continue;
            }

            let flips = board.make_move(coord, color);
            let child = self.minimax(board, depth - 1, !color);
            board.unmake_move(coord, color, flips);

            if best.is_none_or(|(best_score, _)| is_better(child.score, best_score, maximizing)) {
                best = Some((child.score, coord));
            }
        }

        // A side with no move at a live node is scored statically; the pass
        // is not searched as an extra ply.
        match best {
            Some((score, mv)) => SearchResult {
                score,
                best_move: Some(mv),
            },
            None => SearchResult::leaf(evaluate(board, self.maximizer)),
        }
    }
}

/// Strict improvement only, so ties keep the earlier row-major move.
fn is_better(score: i32, best_score: i32, maximizing: bool) -> bool {
    if maximizing {
        score > best_score
    } else {
        score < best_score
    }
}

/// Best move for `color`, searching `depth` plies with `color` as maximizer.
pub fn search(board: &Board, depth: u8, color: Color) -> SearchResult {
    Searcher::new(color).search(board, depth, color)
}

//! Search algorithms and move ordering.

pub mod heuristics;
pub mod negamax;
pub mod ordering;
pub mod tt;

use std::path::Path;

use chess::{Board, ChessMove, MoveGen};
use tracing::debug;

use crate::eval::{BlendedEval, Evaluator, HandcraftedEval};
use crate::board::GameState;
use crate::time::TimeBudget;
use heuristics::{HistoryTable, KillerTable};
use negamax::{negamax, SearchContext, MATE_SCORE};
use tt::TranspositionTable;

pub use negamax::SearchConfig;

/// Aspiration window half-width for the first retry, in centipawns.
const ASPIRATION_WINDOW: i32 = 50;

/// Number of times the aspiration window is doubled before falling back to
/// a full `[-MATE_SCORE, MATE_SCORE]` window.
const ASPIRATION_MAX_RETRIES: u32 = 3;

/// Everything the iterative-deepening loop learned about the last completed
/// (or aborted) search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub nodes: u64,
    pub depth: i16,
}

/// Iterative-deepening negamax searcher. Owns the transposition table,
/// killer/history tables, node counter, and the evaluator — exclusively;
/// callers must not share one `Searcher` across concurrent top-level
/// searches.
pub struct Searcher {
    tt: TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    evaluator: Box<dyn Evaluator>,
    config: SearchConfig,
    nodes: u64,
    last_outcome: SearchOutcome,
}

impl Searcher {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            tt: TranspositionTable::new(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            evaluator,
            config: SearchConfig::default(),
            nodes: 0,
            last_outcome: SearchOutcome::default(),
        }
    }

    pub fn with_handcrafted() -> Self {
        Self::new(Box::new(HandcraftedEval::new()))
    }

    pub fn with_blended(coeff_path: Option<&Path>, alpha: f64) -> Self {
        Self::new(Box::new(BlendedEval::new(coeff_path, alpha)))
    }

    /// Override the pruning techniques used by subsequent searches — tests
    /// use [`SearchConfig::minimax`] to check the pruned search against a
    /// plain alpha-beta baseline.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Details of the most recently completed `search_root` call — node
    /// count and depth reached, for callers that need more than the move
    /// and score (e.g. `bench`'s `nodes`/`nps` columns).
    pub fn last_outcome(&self) -> &SearchOutcome {
        &self.last_outcome
    }

    /// Iterative-deepening search from `board`. `time_ms = None` runs to
    /// `max_depth` regardless of elapsed time.
    ///
    /// Returns the best move in long-algebraic notation (or `None` if the
    /// position has no legal moves) and the score from the side-to-move's
    /// perspective.
    pub fn search_root(
        &mut self,
        board: &Board,
        time_ms: Option<u64>,
        max_depth: i16,
    ) -> (Option<String>, i32) {
        let mut state = GameState::new(*board);
        self.nodes = 0;
        self.tt.new_age();
        self.killers.clear();

        // A terminal root (checkmate or stalemate) has no move to report;
        // the score is 0 regardless of which side is mated, per the
        // NoLegalMoves policy.
        if state.is_checkmate() || state.is_stalemate() {
            self.last_outcome = SearchOutcome { best_move: None, score: 0, nodes: 0, depth: 0 };
            return (None, 0);
        }

        let mut time = TimeBudget::new();
        time.start(time_ms);

        let mut root_best_move: Option<ChessMove> = None;
        let mut score = 0;
        let mut depth_reached: i16 = 0;

        for depth in 1..=max_depth {
            if time.expired() {
                break;
            }

            let mut iter_best_move = root_best_move;
            let iter_score =
                self.aspiration_search(&mut state, depth, score, &time, &mut iter_best_move);

            if time.expired() {
                break;
            }

            score = iter_score;
            depth_reached = depth;
            if let Some(mv) = iter_best_move {
                root_best_move = Some(mv);
            } else if let Some(entry) = self.tt.get(state.hash(), 0) {
                root_best_move = entry.best_move;
            }
            if root_best_move.is_none() {
                root_best_move = MoveGen::new_legal(state.board()).next();
            }

            debug!(depth, score, nodes = self.nodes, best_move = ?root_best_move, "iteration complete");
        }

        self.last_outcome = SearchOutcome {
            best_move: root_best_move,
            score,
            nodes: self.nodes,
            depth: depth_reached,
        };

        (root_best_move.map(|m| m.to_string()), score)
    }

    /// Thin convenience wrapper: build a `BlendedEval` searcher for one
    /// search and return just the best move string.
    pub fn find_best_move(
        board: &Board,
        depth: i16,
        time_ms: Option<u64>,
        coeff_path: Option<&Path>,
        alpha: f64,
    ) -> Option<String> {
        let mut searcher = Self::with_blended(coeff_path, alpha);
        searcher.search_root(board, time_ms, depth).0
    }

    /// Run one iterative-deepening iteration with an aspiration window
    /// around `prev_score`, widening (doubling) on fail-high/fail-low up to
    /// [`ASPIRATION_MAX_RETRIES`] times before falling back to a full
    /// `[-MATE_SCORE, MATE_SCORE]` window.
    fn aspiration_search(
        &mut self,
        state: &mut GameState,
        depth: i16,
        prev_score: i32,
        time: &TimeBudget,
        best_move: &mut Option<ChessMove>,
    ) -> i32 {
        if depth <= 1 || !self.config.aspiration {
            return self.run(state, depth, -MATE_SCORE, MATE_SCORE, time, best_move);
        }

        let mut window = ASPIRATION_WINDOW;
        let mut alpha = (prev_score - window).max(-MATE_SCORE);
        let mut beta = (prev_score + window).min(MATE_SCORE);

        for _ in 0..ASPIRATION_MAX_RETRIES {
            let score = self.run(state, depth, alpha, beta, time, best_move);
            if time.expired() {
                return score;
            }
            if score <= alpha {
                window *= 2;
                alpha = (prev_score - window).max(-MATE_SCORE);
            } else if score >= beta {
                window *= 2;
                beta = (prev_score + window).min(MATE_SCORE);
            } else {
                return score;
            }
        }

        self.run(state, depth, -MATE_SCORE, MATE_SCORE, time, best_move)
    }

    fn run(
        &mut self,
        state: &mut GameState,
        depth: i16,
        alpha: i32,
        beta: i32,
        time: &TimeBudget,
        best_move: &mut Option<ChessMove>,
    ) -> i32 {
        let mut ctx = SearchContext {
            nodes: &mut self.nodes,
            tt: &mut self.tt,
            killers: &mut self.killers,
            history: &mut self.history,
            time,
            evaluator: self.evaluator.as_ref(),
            config: self.config,
            root_best_move: best_move,
        };
        negamax(state, depth, alpha, beta, 0, &mut ctx)
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("nodes", &self.nodes)
            .field("last_outcome", &self.last_outcome)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn depth_1_returns_legal_move_from_startpos() {
        let board = Board::default();
        let mut searcher = Searcher::with_handcrafted();
        let (mv, _score) = searcher.search_root(&board, None, 1);
        assert!(mv.is_some());
    }

    #[test]
    fn finds_mate_in_one() {
        let board = Board::from_str("4k3/8/4K3/8/8/8/8/7R w - - 0 1").unwrap();
        let mut searcher = Searcher::with_handcrafted();
        let (mv, score) = searcher.search_root(&board, None, 4);
        assert_eq!(mv.unwrap(), "h1h8");
        assert!(score >= negamax::MATE_THRESHOLD);
    }

    #[test]
    fn stalemate_position_has_no_move() {
        let board = Board::from_str("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut searcher = Searcher::with_handcrafted();
        let (mv, score) = searcher.search_root(&board, None, 2);
        assert!(mv.is_none());
        assert_eq!(score, 0);
    }

    #[test]
    fn checkmated_root_has_no_move_and_zero_score() {
        let base = Board::from_str("4k3/8/4K3/8/8/8/8/6QR b - - 0 1").unwrap();
        let board = base.make_move_new(chess::ChessMove::new(
            chess::Square::H1,
            chess::Square::H8,
            None,
        ));
        assert_eq!(board.status(), chess::BoardStatus::Checkmate);
        let mut searcher = Searcher::with_handcrafted();
        let (mv, score) = searcher.search_root(&board, None, 2);
        assert!(mv.is_none());
        assert_eq!(score, 0);
    }

    #[test]
    fn iterative_deepening_reaches_requested_depth() {
        let board = Board::default();
        let mut searcher = Searcher::with_handcrafted();
        searcher.search_root(&board, None, 4);
        assert_eq!(searcher.last_outcome().depth, 4);
    }

    #[test]
    fn expired_time_budget_returns_quickly_with_a_move() {
        let board = Board::default();
        let mut searcher = Searcher::with_handcrafted();
        let (mv, _score) = searcher.search_root(&board, Some(1), 64);
        assert!(mv.is_some());
    }

    #[test]
    fn find_best_move_falls_back_without_coeff_file() {
        let board = Board::default();
        let mv = Searcher::find_best_move(&board, 2, None, None, 0.35);
        assert!(mv.is_some());
    }

    #[test]
    fn minimax_config_still_finds_mate_in_one() {
        let board = Board::from_str("4k3/8/4K3/8/8/8/8/7R w - - 0 1").unwrap();
        let mut searcher = Searcher::with_handcrafted().with_config(negamax::SearchConfig::minimax());
        let (mv, score) = searcher.search_root(&board, None, 4);
        assert_eq!(mv.unwrap(), "h1h8");
        assert!(score >= negamax::MATE_THRESHOLD);
    }

    #[test]
    fn repeated_search_reuses_warm_tt() {
        let board = Board::default();
        let mut searcher = Searcher::with_handcrafted();
        searcher.search_root(&board, None, 3);
        let (mv, _score) = searcher.search_root(&board, None, 3);
        assert!(mv.is_some());
    }
}

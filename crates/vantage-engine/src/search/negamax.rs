//! Negamax alpha-beta search with quiescence, null-move pruning and LMR.

use chess::{ChessMove, MoveGen};

use crate::board::GameState;
use crate::eval::phase::non_pawn_material;
use crate::eval::Evaluator;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::order_moves;
use crate::search::tt::{Bound, TranspositionTable};
use crate::time::TimeBudget;

/// Base score for checkmate, adjusted by ply so shorter mates are preferred.
pub const MATE_SCORE: i32 = 100_000;

/// Scores above this threshold indicate a forced mate.
pub const MATE_THRESHOLD: i32 = 99_000;

/// Fixed-capacity ply ceiling for move-ordering tables and recursion safety.
pub const MAX_PLY: usize = 256;

/// Non-pawn material (centipawns, both sides) below which null-move pruning
/// is disabled — the position is considered an endgame where zugzwang makes
/// the null-move assumption unsound.
const NULL_MOVE_MATERIAL_FLOOR: i32 = 1300;

/// Toggles for the pruning techniques layered on top of plain alpha-beta.
/// Defaults to everything on; tests use [`SearchConfig::minimax`] to check
/// the pruned search against a plain full-window alpha-beta baseline.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub null_move: bool,
    pub lmr: bool,
    pub aspiration: bool,
}

impl SearchConfig {
    /// Plain alpha-beta: no null-move pruning, no LMR, no aspiration
    /// windows. Equivalent to minimax modulo alpha-beta cutoffs, which
    /// never change the returned score.
    pub fn minimax() -> Self {
        Self { null_move: false, lmr: false, aspiration: false }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { null_move: true, lmr: true, aspiration: true }
    }
}

/// State threaded through every `negamax`/`quiescence` call in one search.
pub(super) struct SearchContext<'a> {
    pub nodes: &'a mut u64,
    pub tt: &'a mut TranspositionTable,
    pub killers: &'a mut KillerTable,
    pub history: &'a mut HistoryTable,
    pub time: &'a TimeBudget,
    pub evaluator: &'a dyn Evaluator,
    pub config: SearchConfig,
    /// Recorded directly at the root as soon as a new best move is found,
    /// so a time-expired abort still surfaces a move even before the TT
    /// entry for the root is committed.
    pub root_best_move: &'a mut Option<ChessMove>,
}

/// Negamax alpha-beta search. Returns the score from `state`'s side to
/// move's perspective.
pub(super) fn negamax(
    state: &mut GameState,
    depth: i16,
    mut alpha: i32,
    mut beta: i32,
    ply: u16,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    let is_root = ply == 0;

    if ctx.time.expired() {
        return 0;
    }

    if state.is_checkmate() {
        return -MATE_SCORE + ply as i32;
    }
    if state.is_stalemate()
        || state.is_repetition(3)
        || state.is_insufficient_material()
        || state.is_fifty_moves()
    {
        return 0;
    }

    if depth <= 0 {
        return quiescence(state, alpha, beta, ply, ctx);
    }

    if ply as usize >= MAX_PLY {
        return ctx.evaluator.evaluate(state);
    }

    *ctx.nodes += 1;

    let mut tt_move = None;
    if let Some(entry) = ctx.tt.get(state.hash(), ply) {
        tt_move = entry.best_move;
        if entry.depth >= depth {
            match entry.flag {
                Bound::Exact => return entry.score,
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
    }

    let in_check = state.is_check();

    // Null-move pruning: stalemate/checkmate were already ruled out above,
    // so a legal move is guaranteed to exist here.
    if ctx.config.null_move
        && !is_root
        && !in_check
        && depth >= 3
        && non_pawn_material(state.board()) > NULL_MOVE_MATERIAL_FLOOR
        && state.push_null()
    {
        let r = 2 + depth / 4;
        let reduced = depth - 1 - r;
        let score = -negamax(state, reduced, -beta, -beta + 1, ply + 1, ctx);
        state.pop_null();
        if score >= beta {
            return beta;
        }
    }

    let mut moves: Vec<ChessMove> = MoveGen::new_legal(state.board()).collect();
    if moves.is_empty() {
        return 0;
    }
    order_moves(state, &mut moves, ply as usize, tt_move, ctx.killers, ctx.history);

    let original_alpha = alpha;
    let mut best_score = -MATE_SCORE - 1;
    let mut best_move: Option<ChessMove> = None;

    for (i, &mv) in moves.iter().enumerate() {
        let is_capture = state.is_capture(mv);
        let gives_check = state.gives_check(mv);

        state.push(mv);

        let score = if ctx.config.lmr && depth >= 3 && i >= 4 && !is_capture && !gives_check && !in_check {
            let r = 1 + (i as i16) / 8;
            let reduced = (depth - 1 - r).max(0);
            let reduced_score = -negamax(state, reduced, -alpha - 1, -alpha, ply + 1, ctx);
            if reduced_score > alpha {
                -negamax(state, depth - 1, -beta, -alpha, ply + 1, ctx)
            } else {
                reduced_score
            }
        } else {
            -negamax(state, depth - 1, -beta, -alpha, ply + 1, ctx)
        };

        state.pop();

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            if is_root {
                *ctx.root_best_move = Some(mv);
            }
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            if !is_capture {
                ctx.killers.store(ply as usize, mv);
                ctx.history.add(state.side_to_move(), mv.get_dest().to_index(), depth);
            }
            break;
        }
    }

    // A time-expired abort mid-loop leaves best_score/best_move computed
    // from children that themselves returned early with bogus scores —
    // never commit that to the long-lived TT.
    if !ctx.time.expired() {
        let flag = if best_score >= beta {
            Bound::LowerBound
        } else if best_score > original_alpha {
            Bound::Exact
        } else {
            Bound::UpperBound
        };
        ctx.tt.store(state.hash(), depth, best_score, flag, best_move, ply);
    }

    best_score
}

/// Quiescence search: resolve captures and checks before trusting the
/// static evaluation, to avoid horizon misjudgments. Fail-hard.
fn quiescence(
    state: &mut GameState,
    mut alpha: i32,
    beta: i32,
    ply: u16,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    if ctx.time.expired() {
        return 0;
    }
    *ctx.nodes += 1;

    let stand_pat = ctx.evaluator.evaluate(state);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }
    if ply as usize >= MAX_PLY {
        return stand_pat;
    }

    let mut moves: Vec<ChessMove> = MoveGen::new_legal(state.board())
        .filter(|&mv| state.is_capture(mv) || state.gives_check(mv))
        .collect();
    order_moves(state, &mut moves, ply as usize, None, ctx.killers, ctx.history);

    for mv in moves {
        state.push(mv);
        let score = -quiescence(state, -beta, -alpha, ply + 1, ctx);
        state.pop();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

//! Move ordering: score legal moves to maximize beta-cutoff probability.

use chess::{ChessMove, Piece};

use crate::board::GameState;
use crate::search::heuristics::{HistoryTable, KillerTable};

const TT_MOVE_BONUS: i32 = 10_000_000;
const CAPTURE_BASE: i32 = 1_000_000;
const KILLER_0_BONUS: i32 = 100_000;
const KILLER_1_BONUS: i32 = 90_000;

/// `100 * victim_piece_type - attacker_piece_type`, using [`Piece::to_index`]
/// (Pawn=0 .. King=5) as the piece-type ordinal.
fn mvv_lva(victim: Piece, attacker: Piece) -> i32 {
    100 * victim.to_index() as i32 - attacker.to_index() as i32
}

/// Score a single move at `ply` in `state`, per the ordering formula: TT
/// move bonus, then capture MVV-LVA, then killer bonus, then history.
pub fn score_move(
    state: &GameState,
    mv: ChessMove,
    ply: usize,
    tt_move: Option<ChessMove>,
    killers: &KillerTable,
    history: &HistoryTable,
) -> i32 {
    let mut score = 0;

    if tt_move == Some(mv) {
        score += TT_MOVE_BONUS;
    }

    if state.is_capture(mv) {
        let attacker = state.piece_on(mv.get_source()).unwrap_or(Piece::Pawn);
        let victim = if state.is_en_passant(mv) {
            Piece::Pawn
        } else {
            state.piece_on(mv.get_dest()).unwrap_or(Piece::Pawn)
        };
        score += CAPTURE_BASE + mvv_lva(victim, attacker);
    } else if killers.k0(ply) == Some(mv) {
        score += KILLER_0_BONUS;
    } else if killers.k1(ply) == Some(mv) {
        score += KILLER_1_BONUS;
    }

    score += history.score(state.side_to_move(), mv.get_dest().to_index());
    score
}

/// Sort `moves` in place into descending score order. The sort is stable:
/// moves with equal scores keep their relative input order, which matters
/// for LMR's index-based reductions to be reproducible.
pub fn order_moves(
    state: &GameState,
    moves: &mut [ChessMove],
    ply: usize,
    tt_move: Option<ChessMove>,
    killers: &KillerTable,
    history: &HistoryTable,
) {
    moves.sort_by_key(|&mv| {
        std::cmp::Reverse(score_move(state, mv, ply, tt_move, killers, history))
    });
}

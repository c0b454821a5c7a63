//! Material + PSQT evaluator, White POV internally, negated for Black to
//! move before being returned to callers.

use chess::{Color, Square};

use super::{material::material, phase::game_phase, pst::pst_value, Evaluator};
use crate::board::GameState;
use crate::search::negamax::MATE_SCORE;

/// Material + tapered PSQT evaluator with checkmate/draw short-circuits.
#[derive(Default)]
pub struct HandcraftedEval;

impl HandcraftedEval {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for HandcraftedEval {
    fn evaluate(&self, state: &GameState) -> i32 {
        if state.is_checkmate() {
            return -MATE_SCORE;
        }
        if state.is_stalemate()
            || state.is_repetition(3)
            || state.is_insufficient_material()
            || state.is_fifty_moves()
        {
            return 0;
        }

        let board = state.board();
        let phase = game_phase(board);

        let mut score = material(board).tapered(phase, super::phase::MAX_PHASE);

        for sq in *board.combined() {
            if let Some(piece) = board.piece_on(sq) {
                let color = board.color_on(sq).expect("combined square has a color");
                let bonus = pst_value(piece, color, sq).tapered(phase, super::phase::MAX_PHASE);
                score += match color {
                    Color::White => bonus,
                    Color::Black => -bonus,
                };
            }
        }

        if board.side_to_move() == Color::Black {
            -score
        } else {
            score
        }
    }
}

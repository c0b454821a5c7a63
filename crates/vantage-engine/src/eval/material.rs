//! Material balance evaluation.
//!
//! All scores are returned from White's perspective (positive = White ahead).

use chess::{Board, Color};

use crate::eval::score::{Score, S};

/// Base material values indexed by [`Piece::to_index`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   | 100   |
/// | Knight | 320   |
/// | Bishop | 330   |
/// | Rook   | 500   |
/// | Queen  | 900   |
/// | King   |   0   |
///
/// Stored as a packed [`Score`] with equal mg/eg components so the same
/// table serves both the flat and tapered evaluation paths.
pub const MATERIAL_VALUE: [Score; 6] = [
    S(100, 100), // Pawn
    S(320, 320), // Knight
    S(330, 330), // Bishop
    S(500, 500), // Rook
    S(900, 900), // Queen
    S(0, 0),     // King
];

/// Evaluate material balance from White's perspective.
///
/// For each piece kind, counts White pieces and Black pieces and
/// accumulates `MATERIAL_VALUE[kind] * (white_count - black_count)`.
pub fn material(board: &Board) -> Score {
    let mut score = Score::ZERO;

    for &piece in chess::ALL_PIECES.iter() {
        let piece_bb = board.pieces(piece);
        let white_count = (piece_bb & board.color_combined(Color::White)).popcnt() as i16;
        let black_count = (piece_bb & board.color_combined(Color::Black)).popcnt() as i16;
        score += MATERIAL_VALUE[piece.to_index()] * (white_count - black_count);
    }

    score
}

#[cfg(test)]
mod tests {
    use chess::Board;
    use std::str::FromStr;

    use super::{material, MATERIAL_VALUE};
    use crate::eval::score::Score;
    use chess::Piece;

    #[test]
    fn starting_position_is_zero() {
        let board = Board::default();
        assert_eq!(material(&board), Score::ZERO);
    }

    #[test]
    fn missing_black_queen_gives_queen_advantage() {
        let board =
            Board::from_str("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let score = material(&board);
        assert_eq!(score, MATERIAL_VALUE[Piece::Queen.to_index()]);
    }

    #[test]
    fn extra_white_rook() {
        let board =
            Board::from_str("1nbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let score = material(&board);
        assert_eq!(score, MATERIAL_VALUE[Piece::Rook.to_index()]);
    }

    #[test]
    fn score_is_negated_when_black_is_ahead() {
        let board =
            Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1").unwrap();
        let score = material(&board);
        assert_eq!(score, -MATERIAL_VALUE[Piece::Queen.to_index()]);
    }

    #[test]
    fn material_value_table_king_is_zero() {
        assert_eq!(MATERIAL_VALUE[Piece::King.to_index()], Score::ZERO);
    }
}

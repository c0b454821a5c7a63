//! Piece-square tables (PST) for all six piece types.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Use [`pst_value`] to look up the value for either color.

use chess::{Color, Piece, Square};

use crate::eval::score::{Score, S};

#[rustfmt::skip]
const PAWN_PST: [Score; 64] = [
    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),
    S(5,-5),   S(10,-5),  S(10,-10), S(-20,-10),S(-20,-10),S(10,-10), S(10,-5),  S(5,-5),
    S(5,0),    S(-5,0),   S(-10,0),  S(0,5),    S(0,5),    S(-10,0),  S(-5,0),   S(5,0),
    S(0,5),    S(0,5),    S(0,5),    S(20,20),  S(20,20),  S(0,5),    S(0,5),    S(0,5),
    S(5,10),   S(5,10),   S(10,15),  S(25,25),  S(25,25),  S(10,15),  S(5,10),   S(5,10),
    S(10,20),  S(10,20),  S(20,30),  S(30,30),  S(30,30),  S(20,30),  S(10,20),  S(10,20),
    S(100,200),S(100,200),S(100,200),S(100,200),S(100,200),S(100,200),S(100,200),S(100,200),
    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),
];

#[rustfmt::skip]
const KNIGHT_PST: [Score; 64] = [
    S(-50,-50),S(-40,-40),S(-30,-30),S(-30,-30),S(-30,-30),S(-30,-30),S(-40,-40),S(-50,-50),
    S(-40,-40),S(-20,-20),S(0,0),    S(5,5),    S(5,5),    S(0,0),    S(-20,-20),S(-40,-40),
    S(-30,-30),S(5,0),    S(10,10),  S(15,15),  S(15,15),  S(10,10),  S(5,0),    S(-30,-30),
    S(-30,-20),S(0,5),    S(15,15),  S(20,20),  S(20,20),  S(15,15),  S(0,5),    S(-30,-20),
    S(-30,-20),S(5,5),    S(15,15),  S(20,20),  S(20,20),  S(15,15),  S(5,5),    S(-30,-20),
    S(-30,-30),S(0,0),    S(10,10),  S(15,15),  S(15,15),  S(10,10),  S(0,0),    S(-30,-30),
    S(-40,-40),S(-20,-20),S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(-20,-20),S(-40,-40),
    S(-50,-50),S(-40,-40),S(-30,-30),S(-30,-30),S(-30,-30),S(-30,-30),S(-40,-40),S(-50,-50),
];

#[rustfmt::skip]
const BISHOP_PST: [Score; 64] = [
    S(-20,-20),S(-10,-10),S(-10,-10),S(-10,-10),S(-10,-10),S(-10,-10),S(-10,-10),S(-20,-20),
    S(-10,-10),S(5,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(5,0),    S(-10,-10),
    S(-10,-10),S(5,5),    S(5,5),    S(5,5),    S(5,5),    S(5,5),    S(5,5),    S(-10,-10),
    S(-10,-5), S(5,0),    S(5,5),    S(10,10),  S(10,10),  S(5,5),    S(5,0),    S(-10,-5),
    S(-10,-5), S(0,0),    S(5,10),   S(10,10),  S(10,10),  S(5,10),   S(0,0),    S(-10,-5),
    S(-10,-5), S(10,5),   S(0,0),    S(5,5),    S(5,5),    S(0,0),    S(10,5),   S(-10,-5),
    S(-10,-10),S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(-10,-10),
    S(-20,-20),S(-10,-10),S(-10,-10),S(-10,-10),S(-10,-10),S(-10,-10),S(-10,-10),S(-20,-20),
];

#[rustfmt::skip]
const ROOK_PST: [Score; 64] = [
    S(0,0),   S(0,0),   S(0,5),   S(5,5),   S(5,5),   S(0,5),   S(0,0),   S(0,0),
    S(-5,0),  S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(-5,0),
    S(-5,0),  S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(-5,0),
    S(-5,0),  S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(-5,0),
    S(-5,0),  S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(-5,0),
    S(-5,0),  S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(0,0),   S(-5,0),
    S(5,10),  S(10,10), S(10,10), S(10,10), S(10,10), S(10,10), S(10,10), S(5,10),
    S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(0,5),   S(0,5),
];

#[rustfmt::skip]
const QUEEN_PST: [Score; 64] = [
    S(-20,-20),S(-10,-10),S(-10,-10),S(-5,-5), S(-5,-5), S(-10,-10),S(-10,-10),S(-20,-20),
    S(-10,-10),S(0,0),    S(5,0),    S(0,0),   S(0,0),   S(5,0),    S(0,0),    S(-10,-10),
    S(-10,-5), S(5,5),    S(5,5),    S(5,5),   S(5,5),   S(5,5),    S(5,5),    S(-10,-5),
    S(0,0),    S(0,5),    S(5,5),    S(5,10),  S(5,10),  S(5,5),    S(0,5),    S(0,0),
    S(-5,0),   S(0,5),    S(5,5),    S(5,10),  S(5,10),  S(5,5),    S(0,5),    S(-5,0),
    S(-10,-5), S(0,5),    S(5,5),    S(5,5),   S(5,5),   S(5,5),    S(0,5),    S(-10,-5),
    S(-10,-10),S(0,0),    S(0,0),    S(0,0),   S(0,0),   S(0,0),    S(0,0),    S(-10,-10),
    S(-20,-20),S(-10,-10),S(-10,-10),S(-5,0),  S(-5,0),  S(-10,-10),S(-10,-10),S(-20,-20),
];

/// King PST. Middlegame values reward castled corners; endgame values reward centralization.
#[rustfmt::skip]
const KING_PST: [Score; 64] = [
    S(20,-20), S(30,-10), S(10,0),   S(0,0),   S(0,0),   S(10,0),   S(30,-10), S(20,-20),
    S(20,-5),  S(20,0),   S(0,5),    S(0,5),   S(0,5),   S(0,5),    S(20,0),   S(20,-5),
    S(-10,5),  S(-20,10), S(-20,10), S(-20,10),S(-20,10),S(-20,10), S(-20,10), S(-10,5),
    S(-20,0),  S(-30,10), S(-30,10), S(-40,10),S(-40,10),S(-30,10), S(-30,10), S(-20,0),
    S(-30,-10),S(-40,0),  S(-40,0),  S(-50,10),S(-50,10),S(-40,0),  S(-40,0),  S(-30,-10),
    S(-30,-20),S(-40,-10),S(-40,-10),S(-50,-10),S(-50,-10),S(-40,-10),S(-40,-10),S(-30,-20),
    S(-30,-30),S(-40,-20),S(-40,-20),S(-50,-20),S(-50,-20),S(-40,-20),S(-40,-20),S(-30,-30),
    S(-30,-50),S(-40,-30),S(-40,-30),S(-50,-30),S(-50,-30),S(-40,-30),S(-40,-30),S(-30,-50),
];

/// Piece-square table values indexed `[piece_kind][square]`, by [`Piece::to_index`].
///
/// Defined from White's perspective in LERF order (A1 = index 0). Use
/// [`pst_value`] rather than indexing this directly so that color mirroring
/// is handled correctly.
pub static PST: [[Score; 64]; 6] = [
    PAWN_PST,
    KNIGHT_PST,
    BISHOP_PST,
    ROOK_PST,
    QUEEN_PST,
    KING_PST,
];

/// Look up the PST bonus for a piece of the given kind and color on `sq`.
///
/// For Black pieces the square is mirrored vertically (`sq ^ 56`) so that
/// the tables, which are defined from White's perspective, apply
/// symmetrically.
#[inline]
pub fn pst_value(kind: Piece, color: Color, sq: Square) -> Score {
    let idx = match color {
        Color::White => sq.to_index(),
        Color::Black => sq.to_index() ^ 56,
    };
    PST[kind.to_index()][idx]
}

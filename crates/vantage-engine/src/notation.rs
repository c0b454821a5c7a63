//! Standard algebraic notation (SAN) for a legal move.
//!
//! The `chess` crate's `ChessMove` only displays as long-algebraic
//! ("e2e4", "e7e8q"); the `play` CLI mode also needs SAN, so this module
//! builds it from the board the move is played against plus the set of
//! other legal moves (for disambiguation).

use chess::{Board, ChessMove, MoveGen, Piece, Square};

/// Render `mv`, which must be legal in `board`, as SAN.
pub fn to_san(board: &Board, mv: ChessMove) -> String {
    if is_castle(board, mv) {
        let file_delta = mv.get_dest().get_file().to_index() as i8 - mv.get_source().get_file().to_index() as i8;
        let base = if file_delta > 0 { "O-O" } else { "O-O-O" };
        return format!("{base}{}", check_suffix(board, mv));
    }

    let piece = board
        .piece_on(mv.get_source())
        .expect("SAN requested for a move with no piece on its source square");
    let is_capture = board.color_on(mv.get_dest()).is_some() || is_en_passant(board, mv);

    let mut san = String::new();
    if piece == Piece::Pawn {
        if is_capture {
            san.push(file_char(mv.get_source()));
            san.push('x');
        }
        san.push_str(&square_str(mv.get_dest()));
        if let Some(promo) = mv.get_promotion() {
            san.push('=');
            san.push(promo_char(promo));
        }
    } else {
        san.push(piece_char(piece));
        san.push_str(&disambiguator(board, mv, piece));
        if is_capture {
            san.push('x');
        }
        san.push_str(&square_str(mv.get_dest()));
    }

    san.push_str(&check_suffix(board, mv));
    san
}

fn is_castle(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::King)
        && (mv.get_source().get_file().to_index() as i8 - mv.get_dest().get_file().to_index() as i8).abs() == 2
}

fn is_en_passant(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::Pawn)
        && board.en_passant() == Some(mv.get_dest())
        && board.piece_on(mv.get_dest()).is_none()
}

/// File/rank (or both) needed to distinguish `mv` from other legal moves of
/// the same piece type to the same destination square.
fn disambiguator(board: &Board, mv: ChessMove, piece: Piece) -> String {
    let others: Vec<ChessMove> = MoveGen::new_legal(board)
        .filter(|&other| {
            other != mv
                && other.get_dest() == mv.get_dest()
                && board.piece_on(other.get_source()) == Some(piece)
        })
        .collect();

    if others.is_empty() {
        return String::new();
    }

    let same_file = others.iter().any(|o| o.get_source().get_file() == mv.get_source().get_file());
    let same_rank = others.iter().any(|o| o.get_source().get_rank() == mv.get_source().get_rank());

    if !same_file {
        file_char(mv.get_source()).to_string()
    } else if !same_rank {
        rank_char(mv.get_source()).to_string()
    } else {
        square_str(mv.get_source())
    }
}

fn check_suffix(board: &Board, mv: ChessMove) -> &'static str {
    let after = board.make_move_new(mv);
    if after.checkers().popcnt() == 0 {
        return "";
    }
    if MoveGen::new_legal(&after).next().is_none() {
        "#"
    } else {
        "+"
    }
}

fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
        Piece::Pawn => unreachable!("pawns have no SAN piece letter"),
    }
}

fn promo_char(piece: Piece) -> char {
    match piece {
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        _ => unreachable!("only minor/major pieces are legal promotions"),
    }
}

fn file_char(sq: Square) -> char {
    (b'a' + sq.get_file().to_index() as u8) as char
}

fn rank_char(sq: Square) -> char {
    (b'1' + sq.get_rank().to_index() as u8) as char
}

fn square_str(sq: Square) -> String {
    format!("{}{}", file_char(sq), rank_char(sq))
}

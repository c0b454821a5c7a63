//! Killer move table and history heuristic for quiet move ordering.

use chess::{ChessMove, Color};

use crate::search::negamax::MAX_PLY;

/// Two killer moves per ply — quiet moves that caused beta cutoffs.
///
/// Reset only at the start of a new top-level search, not each
/// iterative-deepening iteration, so killers found at shallower depths
/// keep seeding move ordering at deeper ones.
pub struct KillerTable {
    slots: [[Option<ChessMove>; 2]; MAX_PLY],
}

impl KillerTable {
    pub fn new() -> Self {
        Self {
            slots: [[None, None]; MAX_PLY],
        }
    }

    /// Store a killer move at the given ply. Shifts slot 0 to slot 1 if the
    /// new move differs from slot 0. Callers must never pass a capture —
    /// the table does not check this itself.
    pub fn store(&mut self, ply: usize, mv: ChessMove) {
        if ply >= MAX_PLY {
            return;
        }
        if self.slots[ply][0] != Some(mv) {
            self.slots[ply][1] = self.slots[ply][0];
            self.slots[ply][0] = Some(mv);
        }
    }

    pub fn k0(&self, ply: usize) -> Option<ChessMove> {
        self.slots.get(ply).and_then(|s| s[0])
    }

    pub fn k1(&self, ply: usize) -> Option<ChessMove> {
        self.slots.get(ply).and_then(|s| s[1])
    }

    /// Reset every slot. Called at the start of a new top-level search, so
    /// killers from an unrelated prior position don't seed ordering here.
    pub fn clear(&mut self) {
        self.slots = [[None, None]; MAX_PLY];
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// History heuristic table, keyed by `(side_to_move, destination_square)`.
///
/// On a beta cutoff from a non-capture, `depth^2` is added at the key; the
/// value seeds move ordering for the rest of the search, including later
/// iterative-deepening iterations.
pub struct HistoryTable {
    table: [[i32; 64]; 2],
}

impl HistoryTable {
    pub fn new() -> Self {
        Self { table: [[0; 64]; 2] }
    }

    pub fn add(&mut self, side: Color, to: usize, depth: i16) {
        self.table[side.to_index()][to] += (depth as i32) * (depth as i32);
    }

    pub fn score(&self, side: Color, to: usize) -> i32 {
        self.table[side.to_index()][to]
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Square;

    fn mv(from: Square, to: Square) -> ChessMove {
        ChessMove::new(from, to, None)
    }

    #[test]
    fn killer_store_and_check() {
        let mut kt = KillerTable::new();
        let mv1 = mv(Square::E2, Square::E4);
        let mv2 = mv(Square::D2, Square::D4);

        kt.store(5, mv1);
        assert_eq!(kt.k0(5), Some(mv1));
        assert_eq!(kt.k1(5), None);

        kt.store(5, mv2);
        assert_eq!(kt.k0(5), Some(mv2));
        assert_eq!(kt.k1(5), Some(mv1));
    }

    #[test]
    fn killer_same_move_no_shift() {
        let mut kt = KillerTable::new();
        let mv1 = mv(Square::E2, Square::E4);
        let mv2 = mv(Square::D2, Square::D4);

        kt.store(0, mv1);
        kt.store(0, mv2);
        kt.store(0, mv2);
        assert_eq!(kt.k0(0), Some(mv2));
        assert_eq!(kt.k1(0), Some(mv1));
    }

    #[test]
    fn killer_different_plies_independent() {
        let mut kt = KillerTable::new();
        let mv1 = mv(Square::E2, Square::E4);
        kt.store(3, mv1);
        assert_eq!(kt.k0(3), Some(mv1));
        assert_eq!(kt.k0(4), None);
    }

    #[test]
    fn clear_resets_all_slots() {
        let mut kt = KillerTable::new();
        kt.store(5, mv(Square::E2, Square::E4));
        kt.store(5, mv(Square::D2, Square::D4));
        kt.clear();
        assert_eq!(kt.k0(5), None);
        assert_eq!(kt.k1(5), None);
    }

    #[test]
    fn history_add_is_depth_squared() {
        let mut ht = HistoryTable::new();
        assert_eq!(ht.score(Color::White, 20), 0);

        ht.add(Color::White, 20, 4);
        assert_eq!(ht.score(Color::White, 20), 16);

        ht.add(Color::White, 20, 3);
        assert_eq!(ht.score(Color::White, 20), 25);
    }

    #[test]
    fn history_keyed_by_side_independently() {
        let mut ht = HistoryTable::new();
        ht.add(Color::White, 10, 5);
        assert_eq!(ht.score(Color::White, 10), 25);
        assert_eq!(ht.score(Color::Black, 10), 0);
    }
}

//! Transposition table: a plain Zobrist-keyed `HashMap` with a
//! prefer-deeper-or-newer replacement policy.
//!
//! The search is single-threaded and cooperative, so there is no need for
//! the lockless atomic packing a multi-threaded engine would require —
//! `TTEntry` is just a struct, and `TranspositionTable` owns a `HashMap`
//! behind `&mut self` methods.

use std::collections::HashMap;

use chess::ChessMove;

/// Scores above this threshold indicate a forced mate.
const MATE_THRESHOLD: i32 = 99_000;

/// Bound type stored in a TT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact (PV node).
    Exact,
    /// The stored score is a lower bound (failed high / beta cutoff).
    LowerBound,
    /// The stored score is an upper bound (failed low / all-node).
    UpperBound,
}

/// A single transposition table entry.
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub depth: i16,
    pub score: i32,
    pub flag: Bound,
    pub best_move: Option<ChessMove>,
    pub age: u16,
}

/// Convert a search score to TT-storable form.
///
/// Mate scores are path-dependent (`MATE_SCORE - ply`); storing them
/// relative to the node rather than the root keeps them valid when probed
/// again at a different ply.
pub fn score_to_tt(score: i32, ply: u16) -> i32 {
    if score > MATE_THRESHOLD {
        score + ply as i32
    } else if score < -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

/// Reverse the mate-distance adjustment applied by [`score_to_tt`].
pub fn score_from_tt(score: i32, ply: u16) -> i32 {
    if score > MATE_THRESHOLD {
        score - ply as i32
    } else if score < -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

/// Zobrist-keyed transposition table, owned exclusively by one `Searcher`.
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    age: u16,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            age: 0,
        }
    }

    /// Advance the age counter. Called once per top-level search.
    pub fn new_age(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    pub fn age(&self) -> u16 {
        self.age
    }

    /// Probe the table, adjusting a stored mate score back to `ply`-relative.
    pub fn get(&self, hash: u64, ply: u16) -> Option<TTEntry> {
        self.entries.get(&hash).map(|e| TTEntry {
            score: score_from_tt(e.score, ply),
            ..*e
        })
    }

    /// Store an entry, applying the prefer-deeper-or-newer replacement rule:
    /// replace if the slot is empty, the incoming depth is >= the stored
    /// depth, or the incoming age is >= the stored age.
    pub fn store(
        &mut self,
        hash: u64,
        depth: i16,
        score: i32,
        flag: Bound,
        best_move: Option<ChessMove>,
        ply: u16,
    ) {
        let replace = match self.entries.get(&hash) {
            None => true,
            Some(existing) => depth >= existing.depth || self.age >= existing.age,
        };
        if !replace {
            return;
        }
        self.entries.insert(
            hash,
            TTEntry {
                depth,
                score: score_to_tt(score, ply),
                flag,
                best_move,
                age: self.age,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.age = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Square;

    fn mv() -> ChessMove {
        ChessMove::new(Square::E2, Square::E4, None)
    }

    #[test]
    fn store_and_get_roundtrip() {
        let mut tt = TranspositionTable::new();
        tt.store(0xDEAD_BEEF, 5, 100, Bound::Exact, Some(mv()), 0);
        let entry = tt.get(0xDEAD_BEEF, 0).expect("should find stored entry");
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.score, 100);
        assert_eq!(entry.flag, Bound::Exact);
        assert_eq!(entry.best_move, Some(mv()));
    }

    #[test]
    fn get_miss_returns_none() {
        let tt = TranspositionTable::new();
        assert!(tt.get(0x1234, 0).is_none());
    }

    #[test]
    fn deeper_entry_replaces_shallower() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 3, 10, Bound::LowerBound, Some(mv()), 0);
        tt.store(1, 8, 20, Bound::Exact, Some(mv()), 0);
        assert_eq!(tt.get(1, 0).unwrap().depth, 8);
    }

    #[test]
    fn shallower_same_age_does_not_replace() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 8, 10, Bound::LowerBound, Some(mv()), 0);
        tt.store(1, 3, 20, Bound::Exact, Some(mv()), 0);
        assert_eq!(tt.get(1, 0).unwrap().depth, 8);
        assert_eq!(tt.get(1, 0).unwrap().score, 10);
    }

    #[test]
    fn newer_age_replaces_even_if_shallower() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 8, 10, Bound::LowerBound, Some(mv()), 0);
        tt.new_age();
        tt.store(1, 2, 20, Bound::Exact, Some(mv()), 0);
        assert_eq!(tt.get(1, 0).unwrap().depth, 2);
    }

    #[test]
    fn mate_score_adjustment_roundtrip() {
        let mate_score = 100_000 - 3;
        let ply = 5;
        let tt_score = score_to_tt(mate_score, ply);
        assert_eq!(score_from_tt(tt_score, ply), mate_score);
    }

    #[test]
    fn negative_mate_score_adjustment_roundtrip() {
        let mated_score = -(100_000 - 3);
        let ply = 7;
        let tt_score = score_to_tt(mated_score, ply);
        assert_eq!(score_from_tt(tt_score, ply), mated_score);
    }

    #[test]
    fn normal_score_not_adjusted() {
        let tt_score = score_to_tt(150, 10);
        assert_eq!(tt_score, 150);
    }

    #[test]
    fn clear_removes_all_entries() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 5, 100, Bound::Exact, Some(mv()), 0);
        assert!(!tt.is_empty());
        tt.clear();
        assert!(tt.is_empty());
    }
}

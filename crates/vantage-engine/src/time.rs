//! `TimeBudget` — a monotonic deadline polled cooperatively by the searcher.
//!
//! There is no external cancel signal and no cancellation token: the search
//! is single-threaded, so the only way to stop it is for the search itself
//! to notice the deadline has passed. `expired()` is cheap enough to call at
//! every node entry and before every re-search.

use std::time::Instant;

/// A monotonic start instant plus an optional millisecond budget.
///
/// `expired()` is `false` until [`start`](Self::start) is called, and
/// `false` forever if no budget was given (`time_ms = None` means "run to
/// the requested depth").
pub struct TimeBudget {
    start: Option<Instant>,
    budget_ms: Option<u64>,
}

impl TimeBudget {
    pub fn new() -> Self {
        Self { start: None, budget_ms: None }
    }

    /// Record the start instant and the budget in milliseconds. `None`
    /// means no deadline — the search runs to `max_depth` regardless of
    /// elapsed time.
    pub fn start(&mut self, budget_ms: Option<u64>) {
        self.start = Some(Instant::now());
        self.budget_ms = budget_ms;
    }

    /// True iff a budget was set and it has elapsed.
    pub fn expired(&self) -> bool {
        match (self.start, self.budget_ms) {
            (Some(start), Some(budget)) => start.elapsed().as_millis() as u64 >= budget,
            _ => false,
        }
    }

    /// Milliseconds elapsed since `start`, or 0 if not yet started.
    pub fn elapsed_ms(&self) -> u64 {
        self.start.map_or(0, |s| s.elapsed().as_millis() as u64)
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn unstarted_budget_never_expires() {
        let budget = TimeBudget::new();
        assert!(!budget.expired());
    }

    #[test]
    fn no_budget_never_expires() {
        let mut budget = TimeBudget::new();
        budget.start(None);
        sleep(Duration::from_millis(5));
        assert!(!budget.expired());
    }

    #[test]
    fn expires_after_budget_elapses() {
        let mut budget = TimeBudget::new();
        budget.start(Some(1));
        sleep(Duration::from_millis(20));
        assert!(budget.expired());
    }

    #[test]
    fn does_not_expire_before_budget() {
        let mut budget = TimeBudget::new();
        budget.start(Some(10_000));
        assert!(!budget.expired());
    }
}

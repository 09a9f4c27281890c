use std::ops::Range;

use crate::paging::Paging;

/// Result of moving forward one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The page index moved forward.
    Moved,
    /// Already on the last page; advancing means submitting.
    AtEnd,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTick {
    /// The session is finalized; the tick did nothing.
    Halted,
    /// Time is still on the clock.
    Running { remaining: u32 },
    /// The counter dropped below zero; the attempt must be submitted.
    Expired,
}

/// Mutable state of one quiz attempt.
///
/// Two states: active and finalized. While active, the page index moves
/// within `[0, page_count)` and the countdown decrements once per tick.
/// `finalize` flips exactly once; after that every operation is a no-op,
/// so neither navigation nor a stray timer tick can touch a scored attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    paging: Paging,
    current_page: usize,
    remaining_seconds: i64,
    finalized: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(paging: Paging, duration_secs: u32) -> Self {
        Self {
            paging,
            current_page: 0,
            remaining_seconds: i64::from(duration_secs),
            finalized: false,
        }
    }

    #[must_use]
    pub fn paging(&self) -> Paging {
        self.paging
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Seconds left on the clock. Never shown negative; the engine submits
    /// the moment it would be.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        u32::try_from(self.remaining_seconds).unwrap_or(0)
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.paging.is_last(self.current_page)
    }

    /// Question indices on the current page.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        self.paging.range(self.current_page)
    }

    /// Move back one page. Returns whether the page index changed.
    pub fn retreat(&mut self) -> bool {
        if self.finalized || self.current_page == 0 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Move forward one page, or report that the session is at its end.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.finalized || self.is_last_page() {
            return AdvanceOutcome::AtEnd;
        }
        self.current_page += 1;
        AdvanceOutcome::Moved
    }

    /// Decrement the countdown by one second.
    ///
    /// Expiry is reported when the counter drops *below* zero, so a session
    /// started with one second displays `0:00` for a full tick before it
    /// expires.
    pub fn tick(&mut self) -> SessionTick {
        if self.finalized {
            return SessionTick::Halted;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds < 0 {
            SessionTick::Expired
        } else {
            SessionTick::Running {
                remaining: self.remaining_seconds(),
            }
        }
    }

    /// Flip to the finalized state. Returns true only for the call that
    /// performed the transition.
    pub fn finalize(&mut self) -> bool {
        if self.finalized {
            return false;
        }
        self.finalized = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(page_size: usize, total: usize, duration_secs: u32) -> QuizSession {
        QuizSession::new(Paging::new(page_size, total).unwrap(), duration_secs)
    }

    #[test]
    fn retreat_from_first_page_is_a_no_op() {
        let mut session = session(2, 5, 300);
        assert!(!session.retreat());
        assert_eq!(session.current_page(), 0);
    }

    #[test]
    fn advance_walks_to_the_end() {
        let mut session = session(2, 5, 300);
        assert_eq!(session.advance(), AdvanceOutcome::Moved);
        assert_eq!(session.advance(), AdvanceOutcome::Moved);
        assert_eq!(session.current_page(), 2);
        assert!(session.is_last_page());
        assert_eq!(session.advance(), AdvanceOutcome::AtEnd);
        assert_eq!(session.current_page(), 2);
    }

    #[test]
    fn tick_counts_down_and_expires_below_zero() {
        let mut session = session(5, 5, 1);
        assert_eq!(session.tick(), SessionTick::Running { remaining: 0 });
        assert_eq!(session.tick(), SessionTick::Expired);
    }

    #[test]
    fn finalize_flips_exactly_once() {
        let mut session = session(5, 5, 300);
        assert!(session.finalize());
        assert!(!session.finalize());
        assert!(session.is_finalized());
    }

    #[test]
    fn finalized_session_ignores_everything() {
        let mut session = session(2, 5, 300);
        session.advance();
        session.finalize();
        let remaining = session.remaining_seconds();

        assert_eq!(session.tick(), SessionTick::Halted);
        assert!(!session.retreat());
        assert_eq!(session.advance(), AdvanceOutcome::AtEnd);
        assert_eq!(session.remaining_seconds(), remaining);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn page_range_follows_navigation() {
        let mut session = session(2, 5, 300);
        assert_eq!(session.page_range(), 0..2);
        session.advance();
        assert_eq!(session.page_range(), 2..4);
        session.advance();
        assert_eq!(session.page_range(), 4..5);
    }
}

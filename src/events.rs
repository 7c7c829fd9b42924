//! Synchronous notification for the driving/UI layer.
//!
//! Observers are invoked on the same call stack immediately after the
//! mutating table operation completes, never asynchronously. The tagged
//! [`TableEvent`] keeps dispatch exhaustive at compile time.

use crate::table::{GamePhase, HandResult, PlayerAction};

/// Events emitted by [`crate::table::Table`] after state mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A new hand was dealt (or the table degenerated straight to FINISHED).
    HandStarted { phase: GamePhase },
    /// A seat's action was accepted and applied.
    ActionExecuted { seat: usize, action: PlayerAction, amount: u64 },
    /// The table entered a new betting round (flop, turn or river).
    PhaseAdvanced { phase: GamePhase },
    /// The hand finished; one entry per winner.
    HandEnded { results: Vec<HandResult> },
}

/// Synchronous listener for table events.
pub trait TableObserver {
    fn on_event(&mut self, event: &TableEvent);
}

impl<F> TableObserver for F
where
    F: FnMut(&TableEvent),
{
    fn on_event(&mut self, event: &TableEvent) {
        self(event)
    }
}

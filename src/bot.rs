//! Placeholder bot decision making.
//!
//! [`WeightedRandomBot`] is deliberately unsophisticated: it rolls weighted
//! dice over the currently legal actions. Stronger policies plug in through
//! the single-method [`BotPolicy`] trait.

use crate::table::PlayerAction;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Read-only snapshot of what a bot may consider for one decision.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotContext {
    /// Legal actions for the seat, in table order; empty when it cannot act.
    pub valid_actions: Vec<PlayerAction>,
    /// The seat's remaining stack.
    pub chips: u64,
    /// The seat's chips already committed this betting round.
    pub seat_bet: u64,
    /// The table bet to match.
    pub current_bet: u64,
    /// Minimum raise increment over the table bet.
    pub min_raise: u64,
    /// Current pot size.
    pub pot: u64,
}

/// A pluggable decision function for non-human seats.
pub trait BotPolicy {
    /// Pick an action and, for raises, a target bet total.
    fn decide(&mut self, ctx: &BotContext) -> (PlayerAction, u64);
}

/// Weighted-random default policy: check 40%, else call 60%, else raise 20%
/// (to a target between one minimum raise and three, capped by stack), else
/// fold, else the first legal action.
#[derive(Debug)]
pub struct WeightedRandomBot {
    rng: StdRng,
}

impl WeightedRandomBot {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { rng: StdRng::from_seed(seed) }
    }

    /// Deterministic policy for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for WeightedRandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl BotPolicy for WeightedRandomBot {
    fn decide(&mut self, ctx: &BotContext) -> (PlayerAction, u64) {
        if ctx.valid_actions.is_empty() {
            return (PlayerAction::Fold, 0);
        }
        let legal = |a: PlayerAction| ctx.valid_actions.contains(&a);

        if legal(PlayerAction::Check) && self.rng.random::<f64>() < 0.4 {
            return (PlayerAction::Check, 0);
        }
        if legal(PlayerAction::Call) && self.rng.random::<f64>() < 0.6 {
            return (PlayerAction::Call, 0);
        }
        if legal(PlayerAction::Raise) && self.rng.random::<f64>() < 0.2 {
            let min_total = ctx.current_bet + ctx.min_raise;
            let reach = ctx.chips + ctx.seat_bet;
            let max_total = reach.min(min_total.saturating_mul(3)).max(min_total);
            let target = self.rng.random_range(min_total..=max_total);
            return (PlayerAction::Raise, target);
        }
        if legal(PlayerAction::Fold) {
            return (PlayerAction::Fold, 0);
        }
        (ctx.valid_actions[0], 0)
    }
}

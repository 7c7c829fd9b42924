use crate::hand::HoleCards;

/// Mutable per-seat state for one hand and across hands.
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) position: usize,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) current_bet: u64,
    pub(crate) total_bet_in_hand: u64,
    pub(crate) is_active: bool,
    pub(crate) is_folded: bool,
    pub(crate) is_all_in: bool,
    pub(crate) is_human: bool,
}

impl Player {
    pub(crate) fn new(name: String, chips: u64, position: usize, is_human: bool) -> Self {
        Self {
            name,
            chips,
            position,
            hole: None,
            current_bet: 0,
            total_bet_in_hand: 0,
            is_active: true,
            is_folded: false,
            is_all_in: false,
            is_human,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Stable seat index; renumbered when busted seats are purged.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Chips committed in the current betting round.
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// Chips committed over the whole hand.
    pub fn total_bet_in_hand(&self) -> u64 {
        self.total_bet_in_hand
    }

    pub fn is_folded(&self) -> bool {
        self.is_folded
    }

    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether the seat may take a betting action right now.
    pub fn can_act(&self) -> bool {
        self.is_active && !self.is_folded && !self.is_all_in && self.chips > 0
    }

    pub(crate) fn reset_for_new_hand(&mut self) {
        self.hole = None;
        self.current_bet = 0;
        self.total_bet_in_hand = 0;
        self.is_folded = false;
        self.is_all_in = false;
        self.is_active = self.chips > 0;
    }

    /// Move `amount` (capped by the stack) into the pot-bound bet fields.
    /// Returns the chips actually transferred.
    pub(crate) fn commit(&mut self, amount: u64) -> u64 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        self.total_bet_in_hand += paid;
        if self.chips == 0 {
            self.is_all_in = true;
        }
        paid
    }
}

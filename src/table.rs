//! The poker table: seat roster, betting state machine and pot resolution.
//!
//! A single external driver owns the [`Table`] and invokes one operation at
//! a time; the table mutates itself, consults the evaluator and bot policy
//! internally, and notifies subscribed observers synchronously after each
//! mutation.

use crate::bot::{BotContext, BotPolicy, WeightedRandomBot};
use crate::deck::Deck;
use crate::evaluator::{evaluate_hand, HandRanking, HandStrength};
use crate::events::{TableEvent, TableObserver};
use crate::hand::{Board, HoleCards};
use crate::player::Player;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Phases of one hand, advanced strictly in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

/// Betting actions a seat can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// One winner's share of a finished hand. `ranking` is `None` when the pot
/// was awarded uncontested, without a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    pub position: usize,
    pub name: String,
    pub amount: u64,
    pub ranking: Option<HandRanking>,
}

/// A Texas Hold'em table for up to nine seats.
pub struct Table {
    deck: Deck,
    players: Vec<Player>,
    board: Board,
    pot: u64,
    /// Tracked for the driving layer but never populated: multi-way all-ins
    /// are settled from the single undivided pot (see DESIGN.md).
    side_pots: Vec<u64>,
    small_blind: u64,
    big_blind: u64,
    dealer_position: usize,
    current_player: usize,
    current_bet: u64,
    phase: GamePhase,
    min_raise: u64,
    betting_round_complete: bool,
    last_hand_results: Vec<HandResult>,
    rng: ChaCha8Rng,
    bot_policy: Box<dyn BotPolicy>,
    observers: Vec<Box<dyn TableObserver>>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("phase", &self.phase)
            .field("players", &self.players)
            .field("board", &self.board)
            .field("pot", &self.pot)
            .field("dealer_position", &self.dealer_position)
            .field("current_player", &self.current_player)
            .field("current_bet", &self.current_bet)
            .field("min_raise", &self.min_raise)
            .finish_non_exhaustive()
    }
}

impl Table {
    pub const MAX_PLAYERS: usize = 9;

    pub fn new(small_blind: u64, big_blind: u64) -> Self {
        Self::with_seed(small_blind, big_blind, rand::rng().random())
    }

    /// Deterministic table: seeds both the deck shuffle and the default bot
    /// policy for reproducible hands.
    pub fn with_seed(small_blind: u64, big_blind: u64, seed: u64) -> Self {
        Self {
            deck: Deck::standard(),
            players: Vec::new(),
            board: Board::new(),
            pot: 0,
            side_pots: Vec::new(),
            small_blind,
            big_blind,
            dealer_position: 0,
            current_player: 0,
            current_bet: 0,
            phase: GamePhase::Waiting,
            min_raise: big_blind,
            betting_round_complete: false,
            last_hand_results: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            bot_policy: Box::new(WeightedRandomBot::seeded(seed)),
            observers: Vec::new(),
        }
    }

    // --- queries -----------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn side_pots(&self) -> &[u64] {
        &self.side_pots
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    pub fn community_cards(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer_position(&self) -> usize {
        self.dealer_position
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn min_raise(&self) -> u64 {
        self.min_raise
    }

    pub fn betting_round_complete(&self) -> bool {
        self.betting_round_complete
    }

    pub fn last_hand_results(&self) -> &[HandResult] {
        &self.last_hand_results
    }

    /// Chips `seat` must still put in to match the table bet.
    pub fn to_call(&self, seat: usize) -> u64 {
        self.players
            .get(seat)
            .map(|p| self.current_bet.saturating_sub(p.current_bet))
            .unwrap_or(0)
    }

    /// The hand is over once at most one seat remains unfolded, or the
    /// phase has reached showdown/finished.
    pub fn is_hand_over(&self) -> bool {
        self.count_unfolded() <= 1
            || matches!(self.phase, GamePhase::Showdown | GamePhase::Finished)
    }

    // --- setup -------------------------------------------------------------

    /// Subscribe an observer for synchronous event notification.
    pub fn subscribe<O: TableObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the decision policy used for non-human seats.
    pub fn set_bot_policy(&mut self, policy: Box<dyn BotPolicy>) {
        self.bot_policy = policy;
    }

    /// Seat a new player. Returns false once all nine seats are occupied.
    pub fn add_player(&mut self, name: &str, chips: u64, is_human: bool) -> bool {
        if self.players.len() >= Self::MAX_PLAYERS {
            return false;
        }
        let position = self.players.len();
        self.players.push(Player::new(name.to_string(), chips, position, is_human));
        true
    }

    /// Top the table up to `target_players` seats with bots.
    pub fn fill_with_bots(&mut self, target_players: usize) {
        let target = target_players.min(Self::MAX_PLAYERS);
        while self.players.len() < target {
            let name = format!("Bot {}", self.players.len());
            if !self.add_player(&name, 1000, false) {
                break;
            }
        }
    }

    // --- hand lifecycle ----------------------------------------------------

    /// Start a new hand: reset state, purge busted seats, rotate the dealer,
    /// deal hole cards, post blinds and pick the first seat to act. With
    /// fewer than two funded seats the table goes straight to FINISHED.
    pub fn start_new_hand(&mut self) {
        self.last_hand_results.clear();
        if self.count_funded() < 2 {
            self.phase = GamePhase::Finished;
            self.emit(TableEvent::HandStarted { phase: self.phase });
            return;
        }

        self.deck.reset();
        self.deck.shuffle_with(&mut self.rng);
        self.board.clear();
        self.pot = 0;
        self.side_pots.clear();
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        self.phase = GamePhase::PreFlop;
        self.betting_round_complete = false;

        for p in &mut self.players {
            p.reset_for_new_hand();
        }
        self.players.retain(|p| p.chips > 0);
        if self.players.len() < 2 {
            self.phase = GamePhase::Finished;
            self.emit(TableEvent::HandStarted { phase: self.phase });
            return;
        }
        for (i, p) in self.players.iter_mut().enumerate() {
            p.position = i;
        }

        self.dealer_position = (self.dealer_position + 1) % self.players.len();

        // Two passes, one card per seat per pass.
        let n = self.players.len();
        let first_pass = self.deck.deal(n);
        let second_pass = self.deck.deal(n);
        for (i, p) in self.players.iter_mut().enumerate() {
            if let Ok(hole) = HoleCards::try_new(first_pass[i], second_pass[i]) {
                p.hole = Some(hole);
            }
        }

        self.post_blinds();
        self.set_first_to_act();
        // Blinds can consume whole stacks; a hand with at most one seat
        // still able to bet starts with its round already closed.
        self.betting_round_complete = self.count_able_to_bet() <= 1;
        self.emit(TableEvent::HandStarted { phase: self.phase });
    }

    fn post_blinds(&mut self) {
        let n = self.players.len();
        // Heads-up: the dealer posts the small blind.
        let (sb_pos, bb_pos) = if n == 2 {
            (self.dealer_position, (self.dealer_position + 1) % n)
        } else {
            ((self.dealer_position + 1) % n, (self.dealer_position + 2) % n)
        };

        let sb_paid = self.players[sb_pos].commit(self.small_blind);
        self.pot += sb_paid;

        let bb_paid = self.players[bb_pos].commit(self.big_blind);
        self.pot += bb_paid;
        self.current_bet = bb_paid;
    }

    fn set_first_to_act(&mut self) {
        let n = self.players.len();
        self.current_player = match self.phase {
            GamePhase::PreFlop if n == 2 => (self.dealer_position + 1) % n,
            GamePhase::PreFlop => (self.dealer_position + 3) % n,
            _ => (self.dealer_position + 1) % n,
        };
        let mut checked = 0;
        while checked < n {
            if self.players[self.current_player].can_act() {
                break;
            }
            self.current_player = (self.current_player + 1) % n;
            checked += 1;
        }
    }

    /// Advance the phase: deal the next street (burning one card first) or
    /// resolve the showdown after the river. Entering a new street resets
    /// the betting round.
    pub fn advance_phase(&mut self) {
        match self.phase {
            GamePhase::PreFlop => {
                self.burn_and_reveal(3);
                self.phase = GamePhase::Flop;
            }
            GamePhase::Flop => {
                self.burn_and_reveal(1);
                self.phase = GamePhase::Turn;
            }
            GamePhase::Turn => {
                self.burn_and_reveal(1);
                self.phase = GamePhase::River;
            }
            GamePhase::River => {
                self.phase = GamePhase::Showdown;
                self.resolve_showdown();
            }
            GamePhase::Waiting | GamePhase::Showdown | GamePhase::Finished => {}
        }

        if matches!(self.phase, GamePhase::Flop | GamePhase::Turn | GamePhase::River) {
            self.current_bet = 0;
            self.min_raise = self.big_blind;
            for p in &mut self.players {
                p.current_bet = 0;
            }
            self.set_first_to_act();
            // All-in runout: with at most one seat still able to bet the
            // street needs no actions, so the driver can advance again.
            self.betting_round_complete = self.count_able_to_bet() <= 1;
            self.emit(TableEvent::PhaseAdvanced { phase: self.phase });
        }
    }

    fn burn_and_reveal(&mut self, n: usize) {
        self.deck.deal(1);
        let revealed = self.deck.deal(n);
        self.board.extend(revealed);
    }

    // --- betting -----------------------------------------------------------

    /// Legal actions for `seat` right now; empty outside the betting phases
    /// or when the seat cannot act.
    pub fn get_valid_actions(&self, seat: usize) -> Vec<PlayerAction> {
        if !self.in_betting_phase() {
            return Vec::new();
        }
        let Some(player) = self.players.get(seat) else {
            return Vec::new();
        };
        if !player.can_act() {
            return Vec::new();
        }

        let mut actions = vec![PlayerAction::Fold];

        if self.current_bet == 0 {
            actions.push(PlayerAction::Check);
        } else {
            // A blind forced all-in below another blind leaves that seat
            // above the table bet, so the difference can be negative.
            let call_amount = self.current_bet.saturating_sub(player.current_bet);
            if call_amount <= player.chips {
                actions.push(PlayerAction::Call);
            }
            if call_amount >= player.chips && player.chips > 0 {
                actions.push(PlayerAction::AllIn);
            }
        }

        if player.chips > self.current_bet.saturating_sub(player.current_bet) {
            let min_raise_total = self.current_bet + self.min_raise;
            if player.chips + player.current_bet >= min_raise_total {
                actions.push(PlayerAction::Raise);
            } else if player.chips > 0 && !actions.contains(&PlayerAction::AllIn) {
                actions.push(PlayerAction::AllIn);
            }
        }

        actions
    }

    /// Apply `action` for `seat`. Rejected (returning false, with no state
    /// change) unless the seat is the current actor, can act, and the action
    /// is currently legal. `amount` is the raise target total and is ignored
    /// for other actions.
    pub fn execute_action(&mut self, seat: usize, action: PlayerAction, amount: u64) -> bool {
        if !self.in_betting_phase() || seat != self.current_player {
            return false;
        }
        let Some(player) = self.players.get(seat) else {
            return false;
        };
        if !player.can_act() {
            return false;
        }
        if !self.get_valid_actions(seat).contains(&action) {
            return false;
        }

        match action {
            PlayerAction::Fold => {
                self.players[seat].is_folded = true;
            }
            PlayerAction::Check => {}
            PlayerAction::Call => {
                let need = self.current_bet.saturating_sub(self.players[seat].current_bet);
                let paid = self.players[seat].commit(need);
                self.pot += paid;
            }
            PlayerAction::Raise => {
                let target = amount.max(self.current_bet + self.min_raise);
                let need = target.saturating_sub(self.players[seat].current_bet);
                let paid = self.players[seat].commit(need);
                self.pot += paid;
                self.raise_table_bet(self.players[seat].current_bet);
            }
            PlayerAction::AllIn => {
                let stack = self.players[seat].chips;
                let paid = self.players[seat].commit(stack);
                self.pot += paid;
                self.raise_table_bet(self.players[seat].current_bet);
            }
        }

        self.next_player();
        self.check_betting_round_complete();
        self.emit(TableEvent::ActionExecuted { seat, action, amount });

        // Everyone else folded with no showdown: settle immediately.
        if self.is_hand_over() && self.last_hand_results.is_empty() {
            self.finalize_uncontested_pot();
        }
        true
    }

    /// Lift the table bet to `new_bet` if it exceeds it. A full raise resets
    /// the min-raise to its increment; a forced short all-in leaves the
    /// min-raise unchanged while still requiring others to match the total.
    fn raise_table_bet(&mut self, new_bet: u64) {
        if new_bet > self.current_bet {
            self.min_raise = self.min_raise.max(new_bet - self.current_bet);
            self.current_bet = new_bet;
        }
    }

    fn next_player(&mut self) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        let mut checked = 0;
        while checked < n {
            self.current_player = (self.current_player + 1) % n;
            if self.players[self.current_player].can_act() {
                break;
            }
            checked += 1;
        }
    }

    fn check_betting_round_complete(&mut self) {
        if self.count_unfolded() <= 1 {
            self.betting_round_complete = true;
            return;
        }

        let acting: Vec<&Player> =
            self.players.iter().filter(|p| !p.is_folded && !p.is_all_in).collect();
        if acting.len() <= 1 {
            // Everyone else is all-in; no more betting is possible.
            self.betting_round_complete = true;
            return;
        }

        // A seat sitting above the table bet (blind over a short all-in
        // blind) counts as matched; it owes nothing.
        self.betting_round_complete =
            acting.iter().all(|p| p.current_bet >= self.current_bet);
    }

    fn in_betting_phase(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::PreFlop | GamePhase::Flop | GamePhase::Turn | GamePhase::River
        )
    }

    fn count_unfolded(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded).count()
    }

    fn count_able_to_bet(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded && !p.is_all_in).count()
    }

    fn count_funded(&self) -> usize {
        self.players.iter().filter(|p| p.chips > 0).count()
    }

    // --- resolution --------------------------------------------------------

    /// Award the whole pot to the last unfolded seat without any evaluation.
    fn finalize_uncontested_pot(&mut self) {
        let mut unfolded = self.players.iter_mut().filter(|p| !p.is_folded);
        let Some(winner) = unfolded.next() else {
            return;
        };
        if unfolded.next().is_some() {
            return;
        }

        let amount = self.pot;
        winner.chips += amount;
        let result = HandResult {
            position: winner.position,
            name: winner.name.clone(),
            amount,
            ranking: None,
        };
        self.pot = 0;
        self.phase = GamePhase::Finished;
        self.betting_round_complete = true;
        self.last_hand_results = vec![result];
        self.emit(TableEvent::HandEnded { results: self.last_hand_results.clone() });
    }

    /// Showdown: evaluate every unfolded seat, split the pot among the best
    /// hands (remainder chips one each in ascending seat order), and finish
    /// the hand. The pot is settled undivided; see `side_pots`.
    fn resolve_showdown(&mut self) {
        if self.count_unfolded() <= 1 {
            self.finalize_uncontested_pot();
            return;
        }

        let mut strengths: Vec<(usize, HandStrength)> = Vec::new();
        for (i, p) in self.players.iter().enumerate() {
            if p.is_folded {
                continue;
            }
            let Some(hole) = p.hole else {
                continue;
            };
            let mut seven = Vec::with_capacity(7);
            seven.extend(hole.as_array());
            seven.extend_from_slice(self.board.as_slice());
            strengths.push((i, evaluate_hand(&seven)));
        }

        let Some(best) = strengths.iter().map(|&(_, s)| s).max() else {
            return;
        };
        // Iteration order is ascending seat position, so remainder chips go
        // to the lowest-positioned winners first.
        let winners: Vec<usize> =
            strengths.iter().filter(|&&(_, s)| s == best).map(|&(i, _)| i).collect();

        let share = self.pot / winners.len() as u64;
        let remainder = (self.pot % winners.len() as u64) as usize;

        let mut results = Vec::with_capacity(winners.len());
        for (nth, &w) in winners.iter().enumerate() {
            let amount = share + u64::from(nth < remainder);
            let p = &mut self.players[w];
            p.chips += amount;
            results.push(HandResult {
                position: p.position,
                name: p.name.clone(),
                amount,
                ranking: Some(best.ranking()),
            });
        }

        self.pot = 0;
        self.phase = GamePhase::Finished;
        self.last_hand_results = results;
        self.emit(TableEvent::HandEnded { results: self.last_hand_results.clone() });
    }

    // --- bots --------------------------------------------------------------

    /// Ask the configured bot policy to act for `seat`.
    pub fn get_bot_action(&mut self, seat: usize) -> (PlayerAction, u64) {
        let ctx = BotContext {
            valid_actions: self.get_valid_actions(seat),
            chips: self.players.get(seat).map(|p| p.chips).unwrap_or(0),
            seat_bet: self.players.get(seat).map(|p| p.current_bet).unwrap_or(0),
            current_bet: self.current_bet,
            min_raise: self.min_raise,
            pot: self.pot,
        };
        self.bot_policy.decide(&ctx)
    }

    fn emit(&mut self, event: TableEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck.
///
/// Dealing more cards than remain is a caller bug and panics; the table
/// never requests more than the 25 cards a full 9-seat hand can consume.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_engine::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Restore all 52 cards in canonical order.
    pub fn reset(&mut self) {
        *self = Deck::standard();
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal `n` cards from the top of the deck, preserving draw order.
    ///
    /// # Panics
    ///
    /// Panics when fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(
            n <= self.cards.len(),
            "dealt {n} cards with only {} remaining",
            self.cards.len()
        );
        self.cards.split_off(self.cards.len() - n)
    }

    /// Deal a single card.
    ///
    /// # Panics
    ///
    /// Panics when the deck is empty.
    pub fn deal_one(&mut self) -> Card {
        self.deal(1)[0]
    }
}

//! Seven-card Hold'em hand evaluation.
//!
//! [`evaluate_hand`] enumerates all 21 five-card subsets of a seven-card hand
//! (two hole cards plus five community cards), scores each with
//! [`evaluate_five`], and keeps the maximum by `(ranking, tiebreakers)`
//! lexicographic order.

use crate::cards::Card;
use std::cmp::Ordering;
use std::fmt;

/// Hand categories from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandRanking {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRanking {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandRanking::HighCard => "High Card",
            HandRanking::OnePair => "Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
            HandRanking::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Totally ordered hand strength: category plus up to five rank tiebreakers.
///
/// Two strengths compare by category first, then by the tiebreaker values in
/// order. Hands of the same category always carry the same number of
/// tiebreakers, so the zero padding never decides a comparison.
#[derive(Debug, Clone, Copy)]
pub struct HandStrength {
    ranking: HandRanking,
    tiebreakers: [u8; 5],
    tiebreaker_count: usize,
}

impl HandStrength {
    fn new(ranking: HandRanking, tiebreakers: &[u8]) -> Self {
        debug_assert!(tiebreakers.len() <= 5);
        let mut padded = [0u8; 5];
        padded[..tiebreakers.len()].copy_from_slice(tiebreakers);
        Self { ranking, tiebreakers: padded, tiebreaker_count: tiebreakers.len() }
    }

    pub fn ranking(&self) -> HandRanking {
        self.ranking
    }

    /// Tiebreaker values in decreasing significance, e.g. `[7, 9]` for
    /// sevens full of nines.
    pub fn tiebreakers(&self) -> &[u8] {
        &self.tiebreakers[..self.tiebreaker_count]
    }
}

impl PartialEq for HandStrength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandStrength {}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.ranking, self.tiebreakers).cmp(&(other.ranking, other.tiebreakers))
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Evaluate a seven-card hand (two hole cards + five community cards).
///
/// # Panics
///
/// Panics unless exactly seven cards are supplied; any other count is a
/// caller bug, not bad input.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let seven: &[Card; 7] =
        cards.try_into().unwrap_or_else(|_| panic!("expected 7 cards, got {}", cards.len()));
    evaluate_seven(seven)
}

/// Evaluate seven cards by scanning all 21 five-card subsets.
pub fn evaluate_seven(cards: &[Card; 7]) -> HandStrength {
    let mut best: Option<HandStrength> = None;
    for i in 0..3 {
        for j in (i + 1)..4 {
            for k in (j + 1)..5 {
                for l in (k + 1)..6 {
                    for m in (l + 1)..7 {
                        let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                        let strength = evaluate_five(&five);
                        if best.map_or(true, |b| strength > b) {
                            best = Some(strength);
                        }
                    }
                }
            }
        }
    }
    best.expect("21 subsets evaluated")
}

/// Evaluate exactly five cards, checking categories from strongest to weakest.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut values = [0u8; 5];
    for (slot, card) in values.iter_mut().zip(cards.iter()) {
        *slot = card.rank().value();
    }
    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    let mut distinct = values;
    distinct.sort_unstable();
    let mut uniq: Vec<u8> = distinct.to_vec();
    uniq.dedup();

    // A normal straight is five distinct values spanning exactly four; the
    // wheel (A-2-3-4-5) needs a special case because Ace counts as 14 and
    // its straight high card is the Five.
    let straight_high = if uniq.len() == 5 && uniq[4] - uniq[0] == 4 {
        Some(uniq[4])
    } else if uniq == [2, 3, 4, 5, 14] {
        Some(5)
    } else {
        None
    };

    if let (Some(high), true) = (straight_high, is_flush) {
        return if high == 14 {
            HandStrength::new(HandRanking::RoyalFlush, &[14])
        } else {
            HandStrength::new(HandRanking::StraightFlush, &[high])
        };
    }

    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }
    // Highest rank first within each multiplicity.
    let of_a_kind = |n: u8| (2..=14u8).rev().filter(move |&v| counts[v as usize] == n);

    if let Some(quad) = of_a_kind(4).next() {
        let kicker = of_a_kind(1).next().expect("quads leave one kicker");
        return HandStrength::new(HandRanking::FourOfAKind, &[quad, kicker]);
    }

    let trips = of_a_kind(3).next();
    let pairs: Vec<u8> = of_a_kind(2).collect();

    if let (Some(t), Some(&p)) = (trips, pairs.first()) {
        return HandStrength::new(HandRanking::FullHouse, &[t, p]);
    }

    let mut desc = values;
    desc.sort_unstable_by(|a, b| b.cmp(a));

    if is_flush {
        return HandStrength::new(HandRanking::Flush, &desc);
    }
    if let Some(high) = straight_high {
        return HandStrength::new(HandRanking::Straight, &[high]);
    }
    if let Some(t) = trips {
        let kickers: Vec<u8> = of_a_kind(1).collect();
        return HandStrength::new(HandRanking::ThreeOfAKind, &[t, kickers[0], kickers[1]]);
    }
    if pairs.len() == 2 {
        let kicker = of_a_kind(1).next().expect("two pair leaves one kicker");
        return HandStrength::new(HandRanking::TwoPair, &[pairs[0], pairs[1], kicker]);
    }
    if let Some(&p) = pairs.first() {
        let kickers: Vec<u8> = of_a_kind(1).collect();
        return HandStrength::new(HandRanking::OnePair, &[p, kickers[0], kickers[1], kickers[2]]);
    }
    HandStrength::new(HandRanking::HighCard, &desc)
}

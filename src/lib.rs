//! holdem-engine: a Texas Hold'em table engine
//!
//! Goals:
//! - A complete no-limit Hold'em hand lifecycle: blinds, streets, betting,
//!   showdown and pot award, driven one action at a time
//! - Deterministic seven-card evaluation with total ordering across hands
//! - Pluggable bot decisions and synchronous event notification for UIs
//!
//! ## Quick start: play a seeded hand
//! ```
//! use holdem_engine::table::{GamePhase, PlayerAction, Table};
//!
//! let mut table = Table::with_seed(10, 20, 42);
//! table.add_player("You", 1000, true);
//! table.fill_with_bots(3);
//!
//! table.start_new_hand();
//! assert_eq!(table.phase(), GamePhase::PreFlop);
//!
//! while !table.is_hand_over() {
//!     if table.betting_round_complete() {
//!         table.advance_phase();
//!         continue;
//!     }
//!     let seat = table.current_player();
//!     let (action, amount) = table.get_bot_action(seat);
//!     assert!(table.execute_action(seat, action, amount));
//! }
//! assert_eq!(table.phase(), GamePhase::Finished);
//! assert!(!table.last_hand_results().is_empty());
//! ```
//!
//! ## Evaluate a hand directly
//! ```
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::evaluator::{evaluate_hand, HandRanking};
//!
//! let seven = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! assert_eq!(evaluate_hand(&seven).ranking(), HandRanking::OnePair);
//! ```

pub mod bot;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod events;
pub mod hand;
pub mod player;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # holdem-engine: One-Hand Texas Hold'em Core
//!
//! Models a single hand of Texas Hold'em end-to-end: dealing, blind
//! configuration, the four betting streets, community-card reveal with burn
//! cards, chip-stack accounting, and best-five-card hand evaluation for the
//! showdown. Every mutator returns a new immutable snapshot; nothing in the
//! engine is modified in place, so any state can be kept, branched from, or
//! queried repeatedly with identical results.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing, and deck construction
//! - [`chips`] - Non-negative chip amounts with checked arithmetic
//! - [`deck`] - The `Deck` seam, deterministic ChaCha20 shuffling, and a stacked test deck
//! - [`play`] - Betting actions and the per-round play log entries
//! - [`stacks`] - Per-player chip ledger with pure snapshot updates
//! - [`betting`] - The betting-round state machine (turn order, legality, termination)
//! - [`street`] - The four streets and their burn/reveal policy
//! - [`community`] - Incremental flop/turn/river accumulation
//! - [`blinds`] - Small blind with the big blind derived as twice its size
//! - [`hand`] - Hole-card dealing and the street orchestrator
//! - [`eval`] - Classification of 5-7 card pools into labeled combinations
//! - [`showdown`] - Per-player combinations and winner selection
//! - [`logger`] - Hand-history records and JSONL serialization
//! - [`errors`] - Error types for every failing operation
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::eval::{Combination, Label};
//!
//! // Evaluate a 7-card pool
//! let pool = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let combination = Combination::of(&pool);
//! assert_eq!(combination.label(), Label::StraightFlush);
//! ```
//!
//! ## Deterministic Dealing
//!
//! Shuffles are reproducible from a seed:
//!
//! ```rust
//! use holdem_engine::deck::{Deck, ShuffledDeck};
//!
//! let mut a = ShuffledDeck::new_with_seed(42);
//! let mut b = ShuffledDeck::new_with_seed(42);
//! assert_eq!(a.draw().unwrap(), b.draw().unwrap());
//! ```
//!
//! ## A Betting Round
//!
//! Each action yields the next round snapshot:
//!
//! ```rust
//! use holdem_engine::betting::BettingRound;
//! use holdem_engine::chips::Chips;
//! use holdem_engine::player::Player;
//! use holdem_engine::stacks::Stacks;
//!
//! let (p1, p2) = (Player(0), Player(1));
//! let stacks = Stacks::new([(p1, Chips::new(100)), (p2, Chips::new(100))]);
//! let round = BettingRound::new(stacks, &[p1, p2]);
//! let round = round.bet(p1, Chips::new(10)).unwrap();
//! let round = round.call(p2).unwrap();
//! assert!(round.is_finished());
//! assert_eq!(round.pot(), Chips::new(20));
//! ```

pub mod betting;
pub mod blinds;
pub mod cards;
pub mod chips;
pub mod community;
pub mod deck;
pub mod errors;
pub mod eval;
pub mod hand;
pub mod logger;
pub mod play;
pub mod player;
pub mod showdown;
pub mod stacks;
pub mod street;

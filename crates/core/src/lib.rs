//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory-matching game: the deck, the
//! pair-selection state machine, counters, and the win/loss transitions.
//! It has **no dependencies** on rendering, input, audio, or I/O, making it:
//!
//! - **Deterministic**: Same RNG seed produces the same deck
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`config`]: Round configuration and the construction error type
//! - [`deck`]: Cards and shuffled deck building
//! - [`round`]: The [`GameRound`] state machine
//! - [`snapshot`]: Per-frame draw request for renderers
//!
//! # Game Rules
//!
//! - Every symbol appears on exactly two cards
//! - Revealing two cards counts as one attempt
//! - A matching pair stays face up for the rest of the round
//! - A mismatched pair stays face up for 1000ms, then flips back
//! - The sixth wrong attempt loses the round
//! - Matching every pair wins the round
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use tui_memory_core::{GameRound, RoundConfig};
//! use tui_memory_types::Position;
//!
//! let mut rng = SmallRng::seed_from_u64(12345);
//! let mut round = GameRound::new_round(&RoundConfig::default(), &mut rng).unwrap();
//!
//! // Reveal two cards
//! round.select(Position::new(0, 0));
//! round.select(Position::new(0, 1));
//! assert_eq!(round.attempts(), 1);
//!
//! // A mismatched pair flips back once the timer fires
//! round.tick(1000);
//! assert!(!round.is_won());
//! ```
//!
//! # Timing
//!
//! The round keeps its own monotonic clock, advanced by
//! [`GameRound::tick`](round::GameRound::tick). A mismatch schedules a
//! flip-back deadline on that clock; there are no callbacks or threads.

pub mod config;
pub mod deck;
pub mod round;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use config::{RoundConfig, RoundError};
pub use deck::{build_deck, Card};
pub use round::{GameRound, RoundEvent, RoundEvents, RoundStatus};
pub use snapshot::{CardSnapshot, RoundSnapshot};

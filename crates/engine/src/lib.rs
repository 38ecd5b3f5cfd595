//! Session engine - drives rounds through their lifecycle.
//!
//! The core [`GameRound`](tui_memory_core::GameRound) only knows about cards
//! and counters. This crate adds what happens around a round: the game-over
//! pause followed by a fresh deal, the terminal victory screen, and sound
//! requests for an [`AudioSink`].
//!
//! Nothing here performs I/O. The audio sink is passed into each call rather
//! than owned, so the binary decides which collaborator plays sounds and
//! tests can record them.

pub mod audio;
pub mod config;
pub mod session;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use audio::{AudioSink, NullAudio, RecordingAudio};
pub use config::GameConfig;
pub use session::{Screen, Session, SessionSnapshot};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, input mapping, audio).
//!
//! # Grid Dimensions
//!
//! The standard board is a 3x4 grid of 12 cards (6 pairs):
//!
//! - **Rows**: 3 (indexed 0-2)
//! - **Columns**: 4 (indexed 0-3)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `FLIP_BACK_MS` | 1000 | Delay before a mismatched pair turns face down |
//! | `GAME_OVER_PAUSE_MS` | 2000 | Game-over screen duration before a new round |
//! | `VICTORY_BLINK_FRAMES` | 20 | Frames per colour phase of the victory title |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Position, Symbol, Visibility, GRID_COLS, GRID_ROWS};
//!
//! // Six symbols, one pair each on the standard board
//! assert_eq!(Symbol::ALL.len(), (GRID_ROWS as usize * GRID_COLS as usize) / 2);
//!
//! // Labels fit on a card face
//! assert_eq!(Symbol::Shark.label(), "SHARK");
//!
//! // Positions are row-major
//! let pos = Position::new(1, 2);
//! assert_eq!(pos.index(GRID_COLS), 6);
//!
//! // Matched is the only terminal visibility
//! assert!(Visibility::Matched.is_face_up());
//! assert!(!Visibility::Hidden.is_face_up());
//! ```

/// Grid rows on the standard board
pub const GRID_ROWS: u8 = 3;
/// Grid columns on the standard board
pub const GRID_COLS: u8 = 4;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const FLIP_BACK_MS: u32 = 1000;
pub const GAME_OVER_PAUSE_MS: u32 = 2000;

/// Wrong attempts that end the round.
pub const LOSS_THRESHOLD: u32 = 6;

/// Victory screen animation periods (in frames)
pub const VICTORY_BLINK_FRAMES: u32 = 20;
pub const VICTORY_PULSE_FRAMES: u32 = 40;

/// Card symbol kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Dragon,
    TreasureIsland,
    Ship,
    Pirate,
    Treasure,
    Shark,
}

impl Symbol {
    /// Every symbol, in a fixed order.
    pub const ALL: [Symbol; 6] = [
        Symbol::Dragon,
        Symbol::TreasureIsland,
        Symbol::Ship,
        Symbol::Pirate,
        Symbol::Treasure,
        Symbol::Shark,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Dragon => "dragon",
            Symbol::TreasureIsland => "treasure_island",
            Symbol::Ship => "ship",
            Symbol::Pirate => "pirate",
            Symbol::Treasure => "treasure",
            Symbol::Shark => "shark",
        }
    }

    /// Short label printed on a face-up card (at most 6 chars).
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::Dragon => "DRAGON",
            Symbol::TreasureIsland => "ISLAND",
            Symbol::Ship => "SHIP",
            Symbol::Pirate => "PIRATE",
            Symbol::Treasure => "GOLD",
            Symbol::Shark => "SHARK",
        }
    }
}

/// Card visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hidden,
    Revealed,
    Matched,
}

impl Visibility {
    /// True when the card's face should be drawn.
    pub fn is_face_up(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

/// Grid coordinate (zero-based, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index into a grid with `cols` columns.
    pub fn index(&self, cols: u8) -> usize {
        (self.row as usize) * (cols as usize) + (self.col as usize)
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize, cols: u8) -> Self {
        let cols = cols.max(1) as usize;
        Self {
            row: (index / cols) as u8,
            col: (index % cols) as u8,
        }
    }
}

/// Keyboard-level game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Reveal,
}

/// Events consumed by a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A grid cell was picked (mouse click or cursor reveal).
    Select(Position),
    /// The flip-back timer elapsed.
    FlipBackElapsed,
}

/// Sound effect requests sent to the audio player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Match,
    /// Loss after too many wrong attempts.
    GameOver,
    Victory,
    AmbientLoopStart,
    AmbientLoopStop,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Match => "match",
            SoundEffect::GameOver => "game_over",
            SoundEffect::Victory => "victory",
            SoundEffect::AmbientLoopStart => "ambient_loop_start",
            SoundEffect::AmbientLoopStop => "ambient_loop_stop",
        }
    }

    /// One-shot effects, as opposed to the ambient loop controls.
    pub fn is_one_shot(&self) -> bool {
        matches!(
            self,
            SoundEffect::Match | SoundEffect::GameOver | SoundEffect::Victory
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_names_are_distinct() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_labels_fit_card_width() {
        for symbol in Symbol::ALL {
            assert!(symbol.label().len() <= 6, "{:?}", symbol);
        }
    }

    #[test]
    fn test_position_index() {
        assert_eq!(Position::new(0, 0).index(4), 0);
        assert_eq!(Position::new(2, 3).index(4), 11);
        assert_eq!(Position::from_index(7, 4), Position::new(1, 3));
    }

    #[test]
    fn test_visibility_face_up() {
        assert!(!Visibility::Hidden.is_face_up());
        assert!(Visibility::Revealed.is_face_up());
        assert!(Visibility::Matched.is_face_up());
    }

    #[test]
    fn test_one_shot_effects() {
        assert!(SoundEffect::Match.is_one_shot());
        assert!(SoundEffect::Victory.is_one_shot());
        assert!(!SoundEffect::AmbientLoopStart.is_one_shot());
        assert!(!SoundEffect::AmbientLoopStop.is_one_shot());
    }
}

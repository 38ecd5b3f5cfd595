//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! screen points, and keeps a keyboard [`Cursor`] over the card grid.
//! Turning a screen point into a grid position is left to the renderer,
//! which owns the layout.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit};

//! Keyboard cursor over the card grid.

use crate::types::{GameAction, Position};

/// Grid cursor clamped to `rows x cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    rows: u8,
    cols: u8,
}

impl Cursor {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            position: Position::new(0, 0),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the cursor to `position`, clamped to the grid.
    ///
    /// Mouse clicks call this so keyboard play continues from the clicked card.
    pub fn move_to(&mut self, position: Position) {
        self.position = Position::new(
            position.row.min(self.rows - 1),
            position.col.min(self.cols - 1),
        );
    }

    /// Apply an action. Returns the position to select on `Reveal`.
    pub fn apply(&mut self, action: GameAction) -> Option<Position> {
        let Position { row, col } = self.position;
        match action {
            GameAction::MoveUp => self.position.row = row.saturating_sub(1),
            GameAction::MoveDown => self.position.row = (row + 1).min(self.rows - 1),
            GameAction::MoveLeft => self.position.col = col.saturating_sub(1),
            GameAction::MoveRight => self.position.col = (col + 1).min(self.cols - 1),
            GameAction::Reveal => return Some(self.position),
        }
        None
    }
}

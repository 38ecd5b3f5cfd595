use crate::round::RoundStatus;
use crate::types::{Position, Symbol, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub position: Position,
    pub symbol: Symbol,
    pub visibility: Visibility,
}

/// Everything a renderer needs to draw one frame of a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Cards in row-major order.
    pub cards: Vec<CardSnapshot>,
    pub attempts: u32,
    pub wrong_attempts: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub loss_threshold: u32,
    pub status: RoundStatus,
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cards: Vec::new(),
            attempts: 0,
            wrong_attempts: 0,
            matched_pairs: 0,
            total_pairs: 0,
            loss_threshold: 0,
            status: RoundStatus::Playing,
        }
    }
}

impl RoundSnapshot {
    pub fn card_at(&self, position: Position) -> Option<&CardSnapshot> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        self.cards.get(position.index(self.cols))
    }

    /// Number of cards currently face up but not yet matched.
    pub fn revealed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.visibility == Visibility::Revealed)
            .count()
    }
}

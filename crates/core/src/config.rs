//! Round configuration and validation.

use std::fmt;

use crate::types::{Symbol, FLIP_BACK_MS, GRID_COLS, GRID_ROWS, LOSS_THRESHOLD};

/// Why a round could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// `rows * cols` is odd or zero, so the cards cannot be paired.
    OddCellCount { rows: u8, cols: u8 },
    /// Fewer distinct symbols than pairs.
    InsufficientSymbols { needed: usize, available: usize },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::OddCellCount { rows, cols } => write!(
                f,
                "a {}x{} grid has {} cells, which cannot be split into pairs",
                rows,
                cols,
                (*rows as usize) * (*cols as usize)
            ),
            RoundError::InsufficientSymbols { needed, available } => write!(
                f,
                "need {} distinct symbols but only {} were supplied",
                needed, available
            ),
        }
    }
}

impl std::error::Error for RoundError {}

/// Parameters for building a [`GameRound`](crate::GameRound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub rows: u8,
    pub cols: u8,
    pub symbols: Vec<Symbol>,
    /// Wrong attempts that lose the round.
    pub loss_threshold: u32,
    /// Delay before a mismatched pair flips back.
    pub flip_back_ms: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS, Symbol::ALL.to_vec())
    }
}

impl RoundConfig {
    pub fn new(rows: u8, cols: u8, symbols: Vec<Symbol>) -> Self {
        Self {
            rows,
            cols,
            symbols,
            loss_threshold: LOSS_THRESHOLD,
            flip_back_ms: FLIP_BACK_MS,
        }
    }

    pub fn with_loss_threshold(mut self, loss_threshold: u32) -> Self {
        self.loss_threshold = loss_threshold;
        self
    }

    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    pub fn total_pairs(&self) -> usize {
        self.cell_count() / 2
    }

    /// Distinct symbols in the configured set, in first-seen order.
    pub fn distinct_symbols(&self) -> Vec<Symbol> {
        let mut out: Vec<Symbol> = Vec::with_capacity(self.symbols.len());
        for &symbol in &self.symbols {
            if !out.contains(&symbol) {
                out.push(symbol);
            }
        }
        out
    }

    /// Check that a deck can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), RoundError> {
        let cells = self.cell_count();
        if cells == 0 || cells % 2 != 0 {
            return Err(RoundError::OddCellCount {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let available = self.distinct_symbols().len();
        let needed = self.total_pairs();
        if available < needed {
            return Err(RoundError::InsufficientSymbols { needed, available });
        }

        Ok(())
    }
}

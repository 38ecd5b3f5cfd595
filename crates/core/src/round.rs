//! Round module - the pair-matching state machine
//!
//! Per card: Hidden -> Revealed -> Matched (terminal), or back to Hidden
//! via flip-back. Per round: Playing -> Won (terminal) or Playing -> Lost,
//! after which the caller deals a new round.
//!
//! The flip-back is a deadline on the round's own millisecond clock. The
//! clock only moves in [`GameRound::tick`], so the state machine stays
//! synchronous and fully reproducible in tests.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::config::{RoundConfig, RoundError};
use crate::deck::{build_deck, Card};
use crate::snapshot::{CardSnapshot, RoundSnapshot};
use crate::types::{Position, Symbol, Visibility};

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// What a transition did, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Revealed(Position),
    Matched(Symbol),
    Mismatched,
    FlippedBack,
    Won,
    Lost,
}

/// Events from a single transition (at most reveal + outcome + end).
pub type RoundEvents = ArrayVec<RoundEvent, 3>;

/// A single round of the game
#[derive(Debug, Clone)]
pub struct GameRound {
    rows: u8,
    cols: u8,
    cards: Vec<Card>,
    /// Indices of revealed-but-unmatched cards, in selection order.
    pending: ArrayVec<usize, 2>,
    attempts: u32,
    wrong_attempts: u32,
    matched_pairs: u32,
    loss_threshold: u32,
    flip_back_ms: u32,
    /// Milliseconds elapsed since the round was dealt.
    clock_ms: u64,
    /// Clock value at which the pending pair flips back.
    flip_back_at: Option<u64>,
    status: RoundStatus,
}

impl GameRound {
    /// Deal a new round.
    ///
    /// Fails if the grid has an odd cell count or the symbol set has fewer
    /// distinct symbols than pairs.
    pub fn new_round<R: Rng + ?Sized>(config: &RoundConfig, rng: &mut R) -> Result<Self, RoundError> {
        let cards = build_deck(config, rng)?;
        log::info!(
            "dealt {}x{} round ({} pairs, loss at {} wrong attempts)",
            config.rows,
            config.cols,
            config.total_pairs(),
            config.loss_threshold
        );
        Ok(Self::from_cards(config, cards))
    }

    /// Build a round from an explicit card layout (row-major).
    ///
    /// The caller is responsible for passing `rows * cols` cards with every
    /// symbol appearing exactly twice.
    pub fn from_cards(config: &RoundConfig, cards: Vec<Card>) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            cards,
            pending: ArrayVec::new(),
            attempts: 0,
            wrong_attempts: 0,
            matched_pairs: 0,
            loss_threshold: config.loss_threshold,
            flip_back_ms: config.flip_back_ms,
            clock_ms: 0,
            flip_back_at: None,
            status: RoundStatus::Playing,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, position: Position) -> Option<&Card> {
        self.index_of(position).map(|i| &self.cards[i])
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    pub fn loss_threshold(&self) -> u32 {
        self.loss_threshold
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Clock value of the scheduled flip-back, if one is pending.
    pub fn flip_back_deadline(&self) -> Option<u64> {
        self.flip_back_at
    }

    /// True while two unmatched cards wait for the flip-back timer.
    pub fn awaiting_flip_back(&self) -> bool {
        self.pending.is_full()
    }

    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    pub fn is_lost(&self) -> bool {
        self.status == RoundStatus::Lost
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        let i = position.index(self.cols);
        (i < self.cards.len()).then_some(i)
    }

    /// Select the card at `position`.
    ///
    /// Returns the resulting events; an empty list means the selection was
    /// absorbed as a no-op (off-grid, card already face up, pair pending, or
    /// round over).
    pub fn select(&mut self, position: Position) -> RoundEvents {
        let mut events = RoundEvents::new();

        if self.status != RoundStatus::Playing || self.pending.is_full() {
            return events;
        }
        let Some(index) = self.index_of(position) else {
            return events;
        };
        if !self.cards[index].is_hidden() {
            return events;
        }

        self.cards[index].visibility = Visibility::Revealed;
        self.pending.push(index);
        events.push(RoundEvent::Revealed(position));

        if !self.pending.is_full() {
            return events;
        }

        self.attempts += 1;
        let (first, second) = (self.pending[0], self.pending[1]);
        let symbol = self.cards[first].symbol;

        if symbol == self.cards[second].symbol {
            self.cards[first].visibility = Visibility::Matched;
            self.cards[second].visibility = Visibility::Matched;
            self.matched_pairs += 1;
            self.pending.clear();
            log::debug!(
                "matched {} ({}/{})",
                symbol.as_str(),
                self.matched_pairs,
                self.total_pairs()
            );
            events.push(RoundEvent::Matched(symbol));

            if self.is_won() {
                self.status = RoundStatus::Won;
                log::info!(
                    "round won after {} attempts ({} wrong)",
                    self.attempts,
                    self.wrong_attempts
                );
                events.push(RoundEvent::Won);
            }
        } else {
            self.wrong_attempts += 1;
            self.flip_back_at = Some(self.clock_ms + self.flip_back_ms as u64);
            log::debug!(
                "mismatch {}/{}",
                self.wrong_attempts,
                self.loss_threshold
            );
            events.push(RoundEvent::Mismatched);

            if self.wrong_attempts >= self.loss_threshold {
                self.status = RoundStatus::Lost;
                log::info!("round lost after {} attempts", self.attempts);
                events.push(RoundEvent::Lost);
            }
        }

        events
    }

    /// Turn a mismatched pair face down and clear the selection.
    ///
    /// A lone first pick is left alone. Returns `true` if any card was
    /// flipped.
    pub fn on_flip_back_timeout(&mut self) -> bool {
        if !self.pending.is_full() {
            return false;
        }
        let mut flipped = false;
        for &i in &self.pending {
            if self.cards[i].is_revealed() {
                self.cards[i].visibility = Visibility::Hidden;
                flipped = true;
            }
        }
        self.pending.clear();
        self.flip_back_at = None;
        if flipped {
            log::debug!("flipped back");
        }
        flipped
    }

    /// Advance the round clock, firing the flip-back once its deadline passes.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<RoundEvent> {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);

        match self.flip_back_at {
            Some(due) if self.clock_ms >= due => {
                self.on_flip_back_timeout();
                Some(RoundEvent::FlippedBack)
            }
            _ => None,
        }
    }

    /// Capture the draw request for the current frame.
    pub fn snapshot(&self) -> RoundSnapshot {
        let mut snap = RoundSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its card allocation.
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.rows = self.rows;
        out.cols = self.cols;
        out.cards.clear();
        out.cards.extend(self.cards.iter().map(|c| CardSnapshot {
            position: c.position,
            symbol: c.symbol,
            visibility: c.visibility,
        }));
        out.attempts = self.attempts;
        out.wrong_attempts = self.wrong_attempts;
        out.matched_pairs = self.matched_pairs;
        out.total_pairs = self.total_pairs();
        out.loss_threshold = self.loss_threshold;
        out.status = self.status;
    }
}

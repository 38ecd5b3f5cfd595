//! Deck module - cards and shuffled pair dealing
//!
//! A deck is dealt in two shuffles: first the symbol set is shuffled and
//! the needed number of symbols is taken, then every chosen symbol is
//! doubled and the pairs are shuffled across the grid (row-major).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{RoundConfig, RoundError};
use crate::types::{Position, Symbol, Visibility};

/// A single card on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub symbol: Symbol,
    pub position: Position,
    pub visibility: Visibility,
}

impl Card {
    /// Create a face-down card
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self {
            symbol,
            position,
            visibility: Visibility::Hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }
}

/// Deal a shuffled deck for `config`.
///
/// Returns the cards in row-major order, all face down.
pub fn build_deck<R: Rng + ?Sized>(
    config: &RoundConfig,
    rng: &mut R,
) -> Result<Vec<Card>, RoundError> {
    config.validate()?;

    let mut symbols = config.distinct_symbols();
    symbols.shuffle(rng);
    symbols.truncate(config.total_pairs());

    let mut faces: Vec<Symbol> = Vec::with_capacity(config.cell_count());
    faces.extend_from_slice(&symbols);
    faces.extend_from_slice(&symbols);
    faces.shuffle(rng);

    let cards = faces
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::new(symbol, Position::from_index(i, config.cols)))
        .collect();
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn counts(cards: &[Card]) -> HashMap<Symbol, usize> {
        let mut out = HashMap::new();
        for card in cards {
            *out.entry(card.symbol).or_insert(0) += 1;
        }
        out
    }

    #[test]
    fn test_standard_deck_has_six_pairs() {
        let mut rng = SmallRng::seed_from_u64(1);
        let deck = build_deck(&RoundConfig::default(), &mut rng).unwrap();

        assert_eq!(deck.len(), 12);
        let counts = counts(&deck);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_cards_start_hidden_in_row_major_order() {
        let mut rng = SmallRng::seed_from_u64(7);
        let deck = build_deck(&RoundConfig::default(), &mut rng).unwrap();

        for (i, card) in deck.iter().enumerate() {
            assert!(card.is_hidden());
            assert_eq!(card.position.index(4), i);
        }
    }

    #[test]
    fn test_subset_of_symbols_when_more_than_needed() {
        let config = RoundConfig::new(2, 2, Symbol::ALL.to_vec());
        let mut rng = SmallRng::seed_from_u64(3);
        let deck = build_deck(&config, &mut rng).unwrap();

        assert_eq!(deck.len(), 4);
        let counts = counts(&deck);
        assert_eq!(counts.len(), 2);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let config = RoundConfig::default();
        let a = build_deck(&config, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = build_deck(&config, &mut SmallRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = RoundConfig::new(1, 3, Symbol::ALL.to_vec());
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(build_deck(&config, &mut rng).is_err());
    }
}

//! Round rules: dealing, matching, flip-back, win and loss.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tui_memory::core::{GameRound, RoundConfig, RoundError, RoundEvent, RoundStatus};
use tui_memory::types::{Position, Symbol, Visibility};

fn deal(seed: u64) -> GameRound {
    let mut rng = SmallRng::seed_from_u64(seed);
    GameRound::new_round(&RoundConfig::default(), &mut rng).unwrap()
}

/// Both positions of every pair.
fn pairs(round: &GameRound) -> Vec<(Position, Position)> {
    let cards = round.cards();
    let mut out = Vec::new();
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if a.symbol == b.symbol {
                out.push((a.position, b.position));
            }
        }
    }
    out
}

/// Two positions with different symbols.
fn mismatch(round: &GameRound) -> (Position, Position) {
    let first = round.cards()[0];
    let other = round
        .cards()
        .iter()
        .find(|c| c.symbol != first.symbol)
        .unwrap();
    (first.position, other.position)
}

fn visibility(round: &GameRound, pos: Position) -> Visibility {
    round.card_at(pos).unwrap().visibility
}

#[test]
fn test_every_valid_config_deals_exact_pairs() {
    let shapes = [(1, 2), (2, 2), (2, 3), (3, 4), (4, 3), (2, 6)];
    for &(rows, cols) in &shapes {
        for seed in 0..20 {
            let config = RoundConfig::new(rows, cols, Symbol::ALL.to_vec());
            let mut rng = SmallRng::seed_from_u64(seed);
            let round = GameRound::new_round(&config, &mut rng).unwrap();

            assert_eq!(round.cards().len(), rows as usize * cols as usize);
            let mut counts: HashMap<Symbol, usize> = HashMap::new();
            for card in round.cards() {
                *counts.entry(card.symbol).or_insert(0) += 1;
                assert_eq!(card.visibility, Visibility::Hidden);
            }
            assert!(
                counts.values().all(|&n| n == 2),
                "{}x{} seed {}: {:?}",
                rows,
                cols,
                seed,
                counts
            );
            assert_eq!(round.total_pairs() as usize, counts.len());
        }
    }
}

#[test]
fn test_invalid_configs_fail_at_construction() {
    let mut rng = SmallRng::seed_from_u64(1);

    let odd = RoundConfig::new(3, 3, Symbol::ALL.to_vec());
    assert_eq!(
        GameRound::new_round(&odd, &mut rng).unwrap_err(),
        RoundError::OddCellCount { rows: 3, cols: 3 }
    );

    let short = RoundConfig::new(4, 4, Symbol::ALL.to_vec());
    assert_eq!(
        GameRound::new_round(&short, &mut rng).unwrap_err(),
        RoundError::InsufficientSymbols {
            needed: 8,
            available: 6
        }
    );
}

#[test]
fn test_matched_pair_is_absorbing() {
    let mut round = deal(42);
    let (a, b) = pairs(&round)[0];

    round.select(a);
    round.select(b);
    assert_eq!(visibility(&round, a), Visibility::Matched);
    assert_eq!(visibility(&round, b), Visibility::Matched);

    // Mismatches and flip-backs elsewhere never touch the matched pair.
    let rest = pairs(&round);
    let (c, _) = rest[1];
    let (d, _) = rest[2];
    for _ in 0..3 {
        round.select(c);
        round.select(d);
        round.tick(1000);
        round.on_flip_back_timeout();
    }
    assert_eq!(visibility(&round, a), Visibility::Matched);
    assert_eq!(visibility(&round, b), Visibility::Matched);
    assert_eq!(round.matched_pairs(), 1);
}

#[test]
fn test_mismatch_stays_revealed_until_timeout() {
    let mut round = deal(7);
    let (a, b) = mismatch(&round);

    round.select(a);
    let events = round.select(b);
    assert_eq!(events.last(), Some(&RoundEvent::Mismatched));
    assert_eq!(round.wrong_attempts(), 1);

    // No amount of input flips them early.
    round.tick(500);
    round.select(Position::new(2, 3));
    assert_eq!(visibility(&round, a), Visibility::Revealed);
    assert_eq!(visibility(&round, b), Visibility::Revealed);
    assert_eq!(round.snapshot().revealed_count(), 2);

    round.tick(500);
    assert_eq!(visibility(&round, a), Visibility::Hidden);
    assert_eq!(visibility(&round, b), Visibility::Hidden);
    assert_eq!(round.snapshot().revealed_count(), 0);
}

#[test]
fn test_win_after_exactly_six_matches() {
    let mut round = deal(2024);
    let all = pairs(&round);
    assert_eq!(all.len(), 6);

    for (i, &(a, b)) in all.iter().enumerate() {
        assert!(!round.is_won());
        round.select(a);
        let events = round.select(b);
        assert_eq!(round.matched_pairs(), i as u32 + 1);
        if i + 1 == all.len() {
            assert_eq!(events.last(), Some(&RoundEvent::Won));
        }
    }

    assert!(round.is_won());
    assert_eq!(round.status(), RoundStatus::Won);
    assert_eq!(round.attempts(), 6);
    assert_eq!(round.wrong_attempts(), 0);
}

#[test]
fn test_sixth_wrong_attempt_loses() {
    let mut round = deal(5);
    let (a, b) = mismatch(&round);

    for n in 1..=6 {
        round.select(a);
        let events = round.select(b);
        assert_eq!(round.wrong_attempts(), n);
        if n < 6 {
            assert!(!events.contains(&RoundEvent::Lost));
            round.tick(1000);
        } else {
            assert_eq!(events.last(), Some(&RoundEvent::Lost));
        }
    }
    assert!(round.is_lost());
}

#[test]
fn test_face_up_clicks_never_change_counters() {
    let mut round = deal(11);
    let (a, b) = pairs(&round)[0];
    round.select(a);
    round.select(b);

    let (c, _) = pairs(&round)[1];
    round.select(c);

    let before = (round.attempts(), round.wrong_attempts(), round.matched_pairs());
    for pos in [a, b, c, a, c] {
        assert!(round.select(pos).is_empty());
    }
    let after = (round.attempts(), round.wrong_attempts(), round.matched_pairs());
    assert_eq!(before, after);
}

#[test]
fn test_at_most_two_cards_revealed() {
    let mut round = deal(99);
    for row in 0..3 {
        for col in 0..4 {
            round.select(Position::new(row, col));
            assert!(round.snapshot().revealed_count() <= 2);
        }
    }
}

//! Property tests: invariants that must hold over arbitrary guess sequences.

use proptest::prelude::*;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::round::{Round, PLACEHOLDER, STARTING_TRIES};

fn t0() -> OffsetDateTime {
    datetime!(2026-08-07 10:00:00 UTC)
}

fn attempt_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Single lowercase letters, weighted towards the common case
        4 => proptest::char::range('a', 'z').prop_map(|c| c.to_string()),
        // Uppercase (case folding), digits, junk strings, empty input
        1 => proptest::char::range('A', 'Z').prop_map(|c| c.to_string()),
        1 => proptest::char::range('0', '9').prop_map(|c| c.to_string()),
        1 => "[a-z]{2,6}",
        1 => Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_over_any_guess_sequence(
        word in "[a-z]{1,12}",
        attempts in proptest::collection::vec(attempt_strategy(), 0..30),
    ) {
        let mut round = Round::new(&word, t0()).unwrap();

        for (i, attempt) in attempts.iter().enumerate() {
            let now = t0() + Duration::seconds(i as i64);
            round.guess(attempt, now);

            prop_assert!(round.tries_left() <= STARTING_TRIES);
            prop_assert!(round.score_at(now) >= 0);
            prop_assert_eq!(round.is_won(), round.revealed() == round.word());
            prop_assert_eq!(
                round.revealed().chars().count(),
                round.word().chars().count()
            );
            // Every revealed position is either the word letter or masked.
            for (w, r) in round.word().chars().zip(round.revealed().chars()) {
                prop_assert!(r == w || r == PLACEHOLDER);
            }
            // Game-over implies a captured end instant, and vice versa.
            prop_assert_eq!(round.is_game_over(), round.ended_at().is_some());
        }
    }

    #[test]
    fn guesses_after_game_over_change_nothing(
        word in "[a-z]{1,8}",
        attempts in proptest::collection::vec(attempt_strategy(), 1..40),
    ) {
        let mut round = Round::new(&word, t0()).unwrap();
        let mut frozen = None;

        for (i, attempt) in attempts.iter().enumerate() {
            let now = t0() + Duration::seconds(i as i64);
            if let Some(before) = &frozen {
                round.guess(attempt, now);
                prop_assert_eq!(&round.snapshot(), before);
            } else {
                round.guess(attempt, now);
                if round.is_game_over() {
                    frozen = Some(round.snapshot());
                }
            }
        }
    }

    #[test]
    fn snapshot_round_trip_is_lossless(
        word in "[a-z]{1,12}",
        attempts in proptest::collection::vec(attempt_strategy(), 0..20),
        name in "[a-zA-Z ]{0,12}",
    ) {
        let mut round = Round::new(&word, t0()).unwrap();
        for (i, attempt) in attempts.iter().enumerate() {
            round.guess(attempt, t0() + Duration::seconds(i as i64));
        }
        round.set_player_name(&name);

        let restored = Round::from_snapshot(&round.snapshot()).unwrap();
        prop_assert_eq!(restored, round);
    }
}

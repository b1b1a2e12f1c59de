use time::macros::{date, datetime};
use time::OffsetDateTime;

use crate::domain::round::Round;
use crate::domain::snapshot::RoundSnapshot;
use crate::errors::domain::DomainError;

fn t0() -> OffsetDateTime {
    datetime!(2026-08-07 10:00:00 UTC)
}

fn played_round() -> Round {
    let mut round = Round::new("carafe", t0()).unwrap();
    round.reset("carafe", date!(2026 - 08 - 07), t0()).unwrap();
    round.guess("a", t0());
    round.guess("z", t0() + time::Duration::seconds(2));
    round.set_player_name("alice");
    round
}

#[test]
fn snapshot_round_trips_every_field() {
    let round = played_round();
    let restored = Round::from_snapshot(&round.snapshot()).unwrap();
    assert_eq!(restored, round);
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = played_round().snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: RoundSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn snapshot_round_trips_a_finished_round() {
    let mut round = played_round();
    for letter in ["c", "r", "f", "e"] {
        round.guess(letter, t0() + time::Duration::seconds(5));
    }
    assert!(round.is_won());
    round.mark_score_submitted();

    let restored = Round::from_snapshot(&round.snapshot()).unwrap();
    assert_eq!(restored, round);
    assert!(restored.is_won());
    assert!(restored.score_submitted());
}

#[test]
fn guessed_letter_order_is_not_significant_and_duplicates_collapse() {
    let mut snapshot = played_round().snapshot();
    snapshot.guessed = vec!['z', 'a', 'a'];

    let restored = Round::from_snapshot(&snapshot).unwrap();
    assert_eq!(restored.guessed_display(), "a, z");
    assert_eq!(restored.snapshot().guessed, vec!['a', 'z']);
}

#[test]
fn restoring_without_a_word_is_fatal() {
    let mut snapshot = played_round().snapshot();
    snapshot.word = String::new();
    snapshot.revealed = String::new();

    let err = Round::from_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn restoring_with_a_pattern_length_mismatch_is_fatal() {
    let mut snapshot = played_round().snapshot();
    snapshot.revealed = "##".to_string();

    let err = Round::from_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn restoring_with_a_corrupt_pattern_is_fatal() {
    let mut snapshot = played_round().snapshot();
    // "x" is neither the placeholder nor the word letter at position 0.
    snapshot.revealed = "xa#a##".to_string();

    let err = Round::from_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn restoring_with_a_negative_base_score_is_fatal() {
    let mut snapshot = played_round().snapshot();
    snapshot.base_score = -1;

    let err = Round::from_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

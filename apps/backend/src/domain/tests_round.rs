use time::macros::{date, datetime};
use time::OffsetDateTime;

use crate::domain::round::{Round, STARTING_TRIES};
use crate::domain::Phase;
use crate::errors::domain::DomainError;

fn t0() -> OffsetDateTime {
    datetime!(2026-08-07 10:00:00 UTC)
}

fn round_with(word: &str) -> Round {
    Round::new(word, t0()).expect("word is non-empty")
}

#[test]
fn new_round_lowercases_and_masks_the_word() {
    let round = round_with("Damien");
    assert_eq!(round.word(), "damien");
    assert_eq!(round.revealed(), "######");
    assert_eq!(round.tries_left(), STARTING_TRIES);
    assert_eq!(round.phase(), Phase::InProgress);
}

#[test]
fn new_round_without_a_word_is_fatal() {
    let err = Round::new("  ", t0()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn correct_guess_keeps_tries() {
    let mut round = round_with("damien");
    assert!(round.guess("a", t0()));
    assert_eq!(round.tries_left(), 5);
    assert_eq!(round.revealed(), "#a####");
}

#[test]
fn incorrect_guess_consumes_a_try() {
    let mut round = round_with("damien");
    assert!(!round.guess("kdjhgkfjhgdfkjhg", t0()));
    assert_eq!(round.tries_left(), 4);
}

#[test]
fn guess_reveals_all_occurrences() {
    let mut round = round_with("carafe");
    assert!(round.guess("a", t0()));
    assert_eq!(round.revealed(), "#a#a##");
}

#[test]
fn guess_is_case_folded() {
    let mut round = round_with("damien");
    assert!(round.guess("A", t0()));
    assert_eq!(round.revealed(), "#a####");
    assert_eq!(round.guessed_display(), "a");
}

#[test]
fn repeated_guess_is_idempotent() {
    let mut round = round_with("carafe");
    round.guess("a", t0());
    let revealed = round.revealed().to_string();
    let tries = round.tries_left();
    let score = round.score_at(t0());

    round.guess("a", t0());
    assert_eq!(round.revealed(), revealed);
    assert_eq!(round.tries_left(), tries);
    assert_eq!(round.score_at(t0()), score);
    assert_eq!(round.guessed_display(), "a");
}

#[test]
fn tries_never_go_below_zero() {
    let mut round = round_with("carafe");
    for _ in 0..10 {
        round.guess("z", t0());
    }
    assert_eq!(round.tries_left(), 0);
    assert!(round.is_game_over());
    assert!(!round.is_won());
    assert_eq!(round.phase(), Phase::Lost);
}

#[test]
fn five_misses_lose_the_round_and_set_the_end_instant() {
    let mut round = round_with("damien");
    let end = t0() + time::Duration::seconds(4);
    for i in 0..5i64 {
        assert!(!round.guess("z", t0() + time::Duration::seconds(i)));
    }
    assert_eq!(round.tries_left(), 0);
    assert!(round.is_game_over());
    assert!(!round.is_won());
    // Captured at the losing guess, not re-set by anything later.
    assert_eq!(round.ended_at(), Some(end));
}

#[test]
fn winning_reveals_the_word_and_ends_the_round() {
    let mut round = round_with("carafe");
    let end = t0() + time::Duration::seconds(3);
    for letter in ["c", "a", "r", "f"] {
        round.guess(letter, t0());
    }
    assert!(!round.is_game_over());
    assert!(round.guess("e", end));
    assert!(round.is_won());
    assert!(round.is_game_over());
    assert_eq!(round.phase(), Phase::Won);
    assert_eq!(round.tries_left(), 5);
    assert_eq!(round.ended_at(), Some(end));
}

#[test]
fn winning_guess_on_last_try_does_not_decrement() {
    let mut round = round_with("aa");
    for i in 0..4 {
        round.guess(&format!("miss{i}"), t0());
    }
    assert_eq!(round.tries_left(), 1);
    assert!(round.guess("a", t0()));
    assert!(round.is_won());
    assert_eq!(round.tries_left(), 1);
}

#[test]
fn guessing_after_game_over_is_a_no_op() {
    let mut round = round_with("carafe");
    let end = t0() + time::Duration::seconds(1);
    for i in 0..5 {
        round.guess(&format!("miss{i}"), end);
    }
    assert!(round.is_game_over());

    let before = round.snapshot();
    // A correct letter after the loss must not reveal anything.
    assert!(!round.guess("a", t0() + time::Duration::seconds(60)));
    assert_eq!(round.snapshot(), before);
}

#[test]
fn empty_guess_counts_as_a_miss() {
    let mut round = round_with("carafe");
    assert!(!round.guess("", t0()));
    assert_eq!(round.tries_left(), 4);
    // The guessed set holds single characters; there is nothing to record.
    assert_eq!(round.guessed_display(), "");
}

#[test]
fn non_alphabetic_guess_counts_as_a_miss_and_is_recorded() {
    let mut round = round_with("carafe");
    assert!(!round.guess("3", t0()));
    assert_eq!(round.tries_left(), 4);
    assert_eq!(round.guessed_display(), "3");
}

#[test]
fn guessed_display_is_sorted_and_comma_separated() {
    let mut round = round_with("damien");
    for letter in ["z", "a", "m"] {
        round.guess(letter, t0());
    }
    assert_eq!(round.guessed_display(), "a, m, z");
}

#[test]
fn guessed_display_is_empty_for_a_fresh_round() {
    assert_eq!(round_with("damien").guessed_display(), "");
}

#[test]
fn can_play_today_compares_calendar_dates() {
    let today = date!(2026 - 08 - 07);
    let yesterday = date!(2026 - 08 - 06);

    let mut round = round_with("carafe");
    assert!(round.can_play_today(today));

    round.reset("damien", yesterday, t0()).unwrap();
    assert!(round.can_play_today(today));

    round.reset("carafe", today, t0()).unwrap();
    assert!(!round.can_play_today(today));
}

#[test]
fn reset_replaces_the_round_wholesale() {
    let today = date!(2026 - 08 - 07);
    let later = t0() + time::Duration::minutes(10);

    let mut round = round_with("carafe");
    round.guess("a", t0());
    round.guess("z", t0());
    round.set_player_name("alice");
    round.mark_score_submitted();

    round.reset("damien", today, later).unwrap();
    assert_eq!(round.word(), "damien");
    assert_eq!(round.revealed(), "######");
    assert_eq!(round.tries_left(), STARTING_TRIES);
    assert_eq!(round.score_at(later), 1000);
    assert_eq!(round.guessed_display(), "");
    assert_eq!(round.started_at(), later);
    assert_eq!(round.ended_at(), None);
    assert_eq!(round.player_name(), "");
    assert!(!round.score_submitted());
    assert_eq!(round.last_played(), Some(today));
}

#[test]
fn reset_on_the_same_day_fails_and_leaves_state_untouched() {
    let today = date!(2026 - 08 - 07);

    let mut round = round_with("carafe");
    round.reset("damien", today, t0()).unwrap();
    round.guess("a", t0());

    let before = round.snapshot();
    let err = round.reset("carafe", today, t0()).unwrap_err();
    assert_eq!(err, DomainError::DailyLimitExceeded);
    assert_eq!(round.snapshot(), before);
}

#[test]
fn player_name_is_trimmed_and_frozen_after_submission() {
    let mut round = round_with("carafe");
    round.set_player_name("  alice  ");
    assert_eq!(round.player_name(), "alice");

    round.mark_score_submitted();
    round.set_player_name("bob");
    assert_eq!(round.player_name(), "alice");
}

#[test]
fn score_submission_requires_a_won_round_and_a_name() {
    let now = t0();
    let mut round = round_with("aa");
    round.set_player_name("alice");
    assert_eq!(round.score_submission(now), None);

    round.guess("a", now);
    assert!(round.is_won());
    let submission = round.score_submission(now).expect("won and named");
    assert_eq!(submission.player_name, "alice");
    assert_eq!(submission.word, "aa");
    assert_eq!(submission.score, 1000);

    round.mark_score_submitted();
    assert_eq!(round.score_submission(now), None);
}

#[test]
fn score_submission_requires_a_non_empty_name() {
    let mut round = round_with("aa");
    round.guess("a", t0());
    assert!(round.is_won());
    assert_eq!(round.score_submission(t0()), None);
}

//! Service-level round lifecycle tests against in-memory SQLite.

mod support;

use backend::db::txn::with_txn;
use backend::errors::domain::DomainError;
use backend::services::rounds;
use backend::services::scores::top_scores;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::macros::{date, datetime};
use time::OffsetDateTime;

fn t0() -> OffsetDateTime {
    datetime!(2026-08-07 10:00:00 UTC)
}

async fn start_round(state: &backend::AppState, key: &str) -> backend::domain::Round {
    let sessions = state.sessions().clone();
    let words = state.words();
    let key = key.to_string();
    with_txn(state, |txn| {
        Box::pin(async move {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            Ok(rounds::start(
                txn,
                &sessions,
                &key,
                words.as_slice(),
                t0().date(),
                t0(),
                &mut rng,
            )
            .await?)
        })
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn a_fresh_session_gets_a_round_with_the_daily_word() {
    let state = support::sqlite_state(&["carafe"]).await;

    let round = start_round(&state, "s1").await;
    assert_eq!(round.word(), "carafe");
    assert_eq!(round.revealed(), "######");
    assert_eq!(round.tries_left(), 5);

    // The snapshot is in the carrier and restores to the same round.
    let restored = rounds::restore(state.sessions(), "s1").unwrap().unwrap();
    assert_eq!(restored, round);

    // A second session on the same day plays the same word.
    let other = start_round(&state, "s2").await;
    assert_eq!(other.word(), "carafe");
}

#[tokio::test]
async fn guesses_are_persisted_through_the_session_carrier() {
    let state = support::sqlite_state(&["carafe"]).await;
    let mut round = start_round(&state, "s1").await;

    assert!(rounds::guess(state.sessions(), "s1", &mut round, "a", t0()));
    assert!(!rounds::guess(state.sessions(), "s1", &mut round, "z", t0()));

    let restored = rounds::restore(state.sessions(), "s1").unwrap().unwrap();
    assert_eq!(restored.revealed(), "#a#a##");
    assert_eq!(restored.tries_left(), 4);
    assert_eq!(restored.guessed_display(), "a, z");
}

#[tokio::test]
async fn reset_is_gated_to_one_round_per_day() {
    let state = support::sqlite_state(&["carafe"]).await;
    let mut round = start_round(&state, "s1").await;
    let today = date!(2026 - 08 - 07);
    let words = state.words();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    // First reset of the day is allowed and records the gate.
    rounds::reset(
        state.sessions(),
        "s1",
        &mut round,
        words.as_slice(),
        today,
        t0(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(round.last_played(), Some(today));

    // Second reset on the same day is rejected with the round untouched.
    let before = rounds::restore(state.sessions(), "s1").unwrap().unwrap();
    let err = rounds::reset(
        state.sessions(),
        "s1",
        &mut round,
        words.as_slice(),
        today,
        t0(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err, DomainError::DailyLimitExceeded);
    let after = rounds::restore(state.sessions(), "s1").unwrap().unwrap();
    assert_eq!(after, before);

    // The next day the gate opens again.
    rounds::reset(
        state.sessions(),
        "s1",
        &mut round,
        words.as_slice(),
        date!(2026 - 08 - 08),
        t0(),
        &mut rng,
    )
    .unwrap();
}

#[tokio::test]
async fn a_won_round_submits_its_score_exactly_once() {
    let state = support::sqlite_state(&["carafe"]).await;
    let mut round = start_round(&state, "s1").await;

    for letter in ["c", "a", "r", "f", "e"] {
        rounds::guess(state.sessions(), "s1", &mut round, letter, t0());
    }
    assert!(round.is_won());
    rounds::set_player_name(state.sessions(), "s1", &mut round, "alice");

    let sessions = state.sessions().clone();
    let submitted = with_txn(&state, |txn| {
        Box::pin(async move {
            let mut round = rounds::restore(&sessions, "s1")?.unwrap();
            let submitted =
                rounds::submit_score(txn, &sessions, "s1", &mut round, t0()).await?;
            Ok(submitted)
        })
    })
    .await
    .unwrap();
    assert!(submitted);

    // A second submission is a silent no-op and writes nothing.
    let sessions = state.sessions().clone();
    let submitted_again = with_txn(&state, |txn| {
        Box::pin(async move {
            let mut round = rounds::restore(&sessions, "s1")?.unwrap();
            let submitted =
                rounds::submit_score(txn, &sessions, "s1", &mut round, t0()).await?;
            Ok(submitted)
        })
    })
    .await
    .unwrap();
    assert!(!submitted_again);

    let top = with_txn(&state, |txn| {
        Box::pin(async move { Ok(top_scores(txn, None).await?) })
    })
    .await
    .unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].player_name, "alice");
    assert_eq!(top[0].word, "carafe");
    assert_eq!(top[0].score, 1000);
}

#[tokio::test]
async fn a_lost_round_cannot_submit() {
    let state = support::sqlite_state(&["carafe"]).await;
    let mut round = start_round(&state, "s1").await;

    for _ in 0..5 {
        rounds::guess(state.sessions(), "s1", &mut round, "z", t0());
    }
    assert!(round.is_game_over());
    assert!(!round.is_won());
    rounds::set_player_name(state.sessions(), "s1", &mut round, "alice");

    let sessions = state.sessions().clone();
    let submitted = with_txn(&state, |txn| {
        Box::pin(async move {
            let mut round = rounds::restore(&sessions, "s1")?.unwrap();
            let submitted =
                rounds::submit_score(txn, &sessions, "s1", &mut round, t0()).await?;
            Ok(submitted)
        })
    })
    .await
    .unwrap();
    assert!(!submitted);

    let top = with_txn(&state, |txn| {
        Box::pin(async move { Ok(top_scores(txn, None).await?) })
    })
    .await
    .unwrap();
    assert!(top.is_empty());
}

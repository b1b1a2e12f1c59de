//! Round lifecycle services: restore, start, reset, and score submission.
//!
//! One round per session: each operation restores the Round from the
//! session carrier, mutates it, and persists the snapshot back only after
//! the whole operation succeeded.

use rand::Rng;
use sea_orm::DatabaseTransaction;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::domain::round::Round;
use crate::domain::words::choose_word;
use crate::errors::domain::DomainError;
use crate::repos::scores::{self, ScoreData};
use crate::services::words;
use crate::session::store::SessionStore;

/// Restore the session's round from its snapshot, if one exists.
pub fn restore(sessions: &SessionStore, key: &str) -> Result<Option<Round>, DomainError> {
    match sessions.load(key) {
        Some(snapshot) => Ok(Some(Round::from_snapshot(&snapshot)?)),
        None => Ok(None),
    }
}

/// Write the round back into the session carrier.
pub fn persist(sessions: &SessionStore, key: &str, round: &Round) {
    sessions.save(key, round.snapshot());
}

/// Start a round for a fresh session with today's word.
pub async fn start<R: Rng>(
    txn: &DatabaseTransaction,
    sessions: &SessionStore,
    key: &str,
    pool: &[String],
    today: Date,
    now: OffsetDateTime,
    rng: &mut R,
) -> Result<Round, DomainError> {
    let word = words::word_of_day(txn, pool, today, rng).await?;
    let round = Round::new(&word, now)?;
    persist(sessions, key, &round);
    info!(session = key, "round started");
    Ok(round)
}

/// Replace the session's round with a fresh word from the pool.
///
/// The daily gate is consulted before anything else; on `DailyLimitExceeded`
/// (or an empty pool) the stored round is left completely untouched.
pub fn reset<R: Rng>(
    sessions: &SessionStore,
    key: &str,
    round: &mut Round,
    pool: &[String],
    today: Date,
    now: OffsetDateTime,
    rng: &mut R,
) -> Result<(), DomainError> {
    if !round.can_play_today(today) {
        return Err(DomainError::DailyLimitExceeded);
    }
    let word = choose_word(pool, rng)?;
    round.reset(&word, today, now)?;
    persist(sessions, key, round);
    info!(session = key, "round reset");
    Ok(())
}

/// Apply one guess and persist the outcome.
pub fn guess(
    sessions: &SessionStore,
    key: &str,
    round: &mut Round,
    attempt: &str,
    now: OffsetDateTime,
) -> bool {
    let found = round.guess(attempt, now);
    persist(sessions, key, round);
    found
}

/// Record the player name and persist it.
pub fn set_player_name(sessions: &SessionStore, key: &str, round: &mut Round, name: &str) {
    round.set_player_name(name);
    persist(sessions, key, round);
}

/// Submit the round's score to the leaderboard.
///
/// A silent no-op returning `false` unless the round is won, the player is
/// named, and nothing was submitted yet. The submitted flag is flipped only
/// after the store accepted the entry, and the snapshot is persisted only
/// then, so a failed insert leaves the round resubmittable.
pub async fn submit_score(
    txn: &DatabaseTransaction,
    sessions: &SessionStore,
    key: &str,
    round: &mut Round,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    let Some(submission) = round.score_submission(now) else {
        return Ok(false);
    };

    scores::create_score(
        txn,
        ScoreData {
            player_name: submission.player_name.clone(),
            score: submission.score,
            word: submission.word,
        },
    )
    .await?;

    round.mark_score_submitted();
    persist(sessions, key, round);
    info!(
        session = key,
        player = submission.player_name,
        score = submission.score,
        "score submitted"
    );
    Ok(true)
}

//! The serialized shape of a round, as carried by the session store.
//!
//! Field names and types are a stable contract with previously stored
//! sessions; change them only with a compatible migration path. Guessed
//! letters serialize to an ordered sequence and restore into a set.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Persistable record of one round. See [`crate::domain::Round::snapshot`]
/// and [`crate::domain::Round::from_snapshot`] for the round-trip contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub word: String,
    pub revealed: String,
    pub tries_left: u8,
    pub base_score: i64,
    pub guessed: Vec<char>,
    pub started_at: OffsetDateTime,
    pub ended_at: Option<OffsetDateTime>,
    pub player_name: String,
    pub score_submitted: bool,
    pub last_played: Option<Date>,
}

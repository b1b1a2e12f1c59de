//! Public view of a round, safe to show the player.
//!
//! The target word appears only once the round is over; before that the
//! client sees the revealed pattern alone.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::round::{Phase, Round};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub revealed: String,
    pub tries_left: u8,
    pub score: i64,
    /// Guessed letters as a display string, e.g. `"a, e, z"`.
    pub guessed: String,
    pub phase: Phase,
    pub game_over: bool,
    pub won: bool,
    /// Disclosed only after game-over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

/// Project the round into its public view as of `now`.
pub fn round_public(round: &Round, now: OffsetDateTime) -> RoundPublic {
    let game_over = round.is_game_over();
    RoundPublic {
        revealed: round.revealed().to_string(),
        tries_left: round.tries_left(),
        score: round.score_at(now),
        guessed: round.guessed_display(),
        phase: round.phase(),
        game_over,
        won: round.is_won(),
        word: game_over.then(|| round.word().to_string()),
    }
}

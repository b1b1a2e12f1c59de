//! DTOs for the scores adapter.

/// Data for inserting one leaderboard entry.
#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub player_name: String,
    pub score: i64,
    pub word: String,
}

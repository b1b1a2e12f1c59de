//! Leaderboard services.

use sea_orm::ConnectionTrait;

use crate::errors::domain::DomainError;
use crate::repos::scores::{self, Score};

/// Default number of entries returned by a leaderboard read.
pub const DEFAULT_TOP_LIMIT: u64 = 1000;

/// Top scores ordered descending by score.
pub async fn top_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<Score>, DomainError> {
    scores::top_scores(conn, limit.unwrap_or(DEFAULT_TOP_LIMIT)).await
}

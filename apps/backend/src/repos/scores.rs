//! Scores repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::scores_sea as scores_adapter;
use crate::entities::scores;
use crate::errors::domain::DomainError;

/// Leaderboard entry domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub id: i64,
    pub player_name: String,
    pub score: i64,
    pub word: String,
    pub created_at: time::OffsetDateTime,
}

/// Data for creating a leaderboard entry
#[derive(Debug, Clone)]
pub struct ScoreData {
    pub player_name: String,
    pub score: i64,
    pub word: String,
}

/// Append one finished round to the leaderboard
pub async fn create_score(
    txn: &DatabaseTransaction,
    data: ScoreData,
) -> Result<Score, DomainError> {
    let dto = scores_adapter::ScoreCreate {
        player_name: data.player_name,
        score: data.score,
        word: data.word,
    };
    let score = scores_adapter::create_score(txn, dto).await?;
    Ok(Score::from(score))
}

/// Top scores ordered descending by score
pub async fn top_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<Score>, DomainError> {
    let scores = scores_adapter::find_top(conn, limit).await?;
    Ok(scores.into_iter().map(Score::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<scores::Model> for Score {
    fn from(model: scores::Model) -> Self {
        Self {
            id: model.id,
            player_name: model.player_name,
            score: model.score,
            word: model.word,
            created_at: model.created_at,
        }
    }
}

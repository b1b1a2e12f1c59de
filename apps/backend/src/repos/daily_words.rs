//! Daily word repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::Date;

use crate::adapters::daily_words_sea as daily_words_adapter;
use crate::entities::daily_words;
use crate::errors::domain::DomainError;

/// Daily word assignment domain model
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWord {
    pub id: i64,
    pub day: Date,
    pub word: String,
    pub created_at: time::OffsetDateTime,
}

/// The word assigned to `day`, if one exists
pub async fn find_by_day<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    day: Date,
) -> Result<Option<DailyWord>, DomainError> {
    let assignment = daily_words_adapter::find_by_day(conn, day).await?;
    Ok(assignment.map(DailyWord::from))
}

/// Assign `word` to `day`
pub async fn assign(
    txn: &DatabaseTransaction,
    day: Date,
    word: &str,
) -> Result<DailyWord, DomainError> {
    let assignment = daily_words_adapter::create(txn, day, word).await?;
    Ok(DailyWord::from(assignment))
}

// Conversions between SeaORM models and domain models

impl From<daily_words::Model> for DailyWord {
    fn from(model: daily_words::Model) -> Self {
        Self {
            id: model.id,
            day: model.day,
            word: model.word,
            created_at: model.created_at,
        }
    }
}

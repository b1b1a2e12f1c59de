//! SeaORM adapter for the daily word assignment.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    Set,
};
use time::Date;

use crate::entities::daily_words;

/// The word assigned to a calendar day, if any
pub async fn find_by_day<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    day: Date,
) -> Result<Option<daily_words::Model>, sea_orm::DbErr> {
    daily_words::Entity::find()
        .filter(daily_words::Column::Day.eq(day))
        .one(conn)
        .await
}

/// Assign a word to a calendar day
pub async fn create(
    txn: &DatabaseTransaction,
    day: Date,
    word: &str,
) -> Result<daily_words::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let assignment = daily_words::ActiveModel {
        id: sea_orm::NotSet,
        day: Set(day),
        word: Set(word.to_string()),
        created_at: Set(now),
    };

    assignment.insert(txn).await
}

//! SeaORM adapter for the scores repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::scores;

pub mod dto;

pub use dto::ScoreCreate;

/// Insert one leaderboard entry
pub async fn create_score(
    txn: &DatabaseTransaction,
    dto: ScoreCreate,
) -> Result<scores::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let score = scores::ActiveModel {
        id: sea_orm::NotSet,
        player_name: Set(dto.player_name),
        score: Set(dto.score),
        word: Set(dto.word),
        created_at: Set(now),
    };

    score.insert(txn).await
}

/// Top scores, descending (leaderboard read)
pub async fn find_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .order_by(scores::Column::Score, Order::Desc)
        .limit(limit)
        .all(conn)
        .await
}

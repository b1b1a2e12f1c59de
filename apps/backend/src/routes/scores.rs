//! Leaderboard HTTP routes.

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::scores;
use crate::state::app_state::AppState;

#[derive(Deserialize)]
struct TopQuery {
    limit: Option<u64>,
}

#[derive(Serialize)]
struct ScoreEntry {
    player_name: String,
    score: i64,
    word: String,
}

/// GET /api/scores?limit=N
///
/// Leaderboard entries, descending by score.
async fn get_top_scores(
    state: web::Data<AppState>,
    query: web::Query<TopQuery>,
) -> Result<web::Json<Vec<ScoreEntry>>, AppError> {
    let limit = query.limit;

    let entries = with_txn(state.get_ref(), |txn| {
        Box::pin(async move { Ok(scores::top_scores(txn, limit).await?) })
    })
    .await?;

    Ok(web::Json(
        entries
            .into_iter()
            .map(|entry| ScoreEntry {
                player_name: entry.player_name,
                score: entry.score,
                word: entry.word,
            })
            .collect(),
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_top_scores)));
}

//! Round HTTP routes: the thin surface over the round lifecycle services.
//!
//! Every handler restores the session's round from its snapshot, applies
//! one operation, and answers with the public view. Fresh sessions get a
//! session cookie on the response.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::round::Round;
use crate::domain::view::{round_public, RoundPublic};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::session_key::SessionKey;
use crate::services::rounds;
use crate::state::app_state::AppState;

#[derive(Deserialize)]
struct GuessRequest {
    attempt: String,
}

#[derive(Deserialize)]
struct PlayerRequest {
    name: String,
}

#[derive(Serialize)]
struct ScoreResponse {
    score: i64,
}

#[derive(Serialize)]
struct SubmitResponse {
    submitted: bool,
    round: RoundPublic,
}

fn ok_json<T: Serialize>(key: &SessionKey, body: &T) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    if let Some(cookie) = key.issue_cookie() {
        builder.cookie(cookie);
    }
    builder.json(body)
}

fn require_round(state: &AppState, key: &SessionKey) -> Result<Round, AppError> {
    rounds::restore(state.sessions(), &key.id)?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::RoundNotFound,
            "no round for this session; fetch the round first".to_string(),
        )
    })
}

/// GET /api/round
///
/// The session's current round. A fresh session gets a round started with
/// today's word.
async fn get_round(
    state: web::Data<AppState>,
    key: SessionKey,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();

    let round = match rounds::restore(state.sessions(), &key.id)? {
        Some(round) => round,
        None => {
            let sessions = state.sessions().clone();
            let words = state.words();
            let id = key.id.clone();
            with_txn(state.get_ref(), |txn| {
                Box::pin(async move {
                    let mut rng = rand::rng();
                    Ok(rounds::start(
                        txn,
                        &sessions,
                        &id,
                        words.as_slice(),
                        now.date(),
                        now,
                        &mut rng,
                    )
                    .await?)
                })
            })
            .await?
        }
    };

    Ok(ok_json(&key, &round_public(&round, now)))
}

/// POST /api/round/guess
///
/// Apply one guess. After game-over this is a no-op that re-renders the
/// terminal view.
async fn post_guess(
    state: web::Data<AppState>,
    key: SessionKey,
    body: web::Json<GuessRequest>,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let mut round = require_round(&state, &key)?;

    rounds::guess(state.sessions(), &key.id, &mut round, &body.attempt, now);

    Ok(ok_json(&key, &round_public(&round, now)))
}

/// POST /api/round/reset
///
/// Start over with a fresh word, subject to the one-round-per-day gate.
async fn post_reset(
    state: web::Data<AppState>,
    key: SessionKey,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let mut round = require_round(&state, &key)?;

    let words = state.words();
    let mut rng = rand::rng();
    rounds::reset(
        state.sessions(),
        &key.id,
        &mut round,
        words.as_slice(),
        now.date(),
        now,
        &mut rng,
    )?;

    Ok(ok_json(&key, &round_public(&round, now)))
}

/// POST /api/round/player
///
/// Record the name the score will be submitted under.
async fn post_player(
    state: web::Data<AppState>,
    key: SessionKey,
    body: web::Json<PlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let mut round = require_round(&state, &key)?;

    rounds::set_player_name(state.sessions(), &key.id, &mut round, &body.name);

    Ok(ok_json(&key, &round_public(&round, now)))
}

/// GET /api/round/score
///
/// The current time-decayed score on its own, polled by the page.
async fn get_score(
    state: web::Data<AppState>,
    key: SessionKey,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let round = require_round(&state, &key)?;

    Ok(ok_json(
        &key,
        &ScoreResponse {
            score: round.score_at(now),
        },
    ))
}

/// POST /api/round/score
///
/// Submit the finished round to the leaderboard. A silent no-op (with
/// `submitted: false`) unless the round is won, named, and unsubmitted.
async fn post_score(
    state: web::Data<AppState>,
    key: SessionKey,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let round = require_round(&state, &key)?;

    let sessions = state.sessions().clone();
    let id = key.id.clone();
    let (submitted, round) = with_txn(state.get_ref(), |txn| {
        Box::pin(async move {
            let mut round = round;
            let submitted =
                rounds::submit_score(txn, &sessions, &id, &mut round, now).await?;
            Ok((submitted, round))
        })
    })
    .await?;

    Ok(ok_json(
        &key,
        &SubmitResponse {
            submitted,
            round: round_public(&round, now),
        },
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_round)));
    cfg.service(web::resource("/guess").route(web::post().to(post_guess)));
    cfg.service(web::resource("/reset").route(web::post().to(post_reset)));
    cfg.service(web::resource("/player").route(web::post().to(post_player)));
    cfg.service(
        web::resource("/score")
            .route(web::get().to(get_score))
            .route(web::post().to(post_score)),
    );
}

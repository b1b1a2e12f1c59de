//! HTTP surface tests: session cookie flow, round lifecycle, error shape.

mod support;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::routes;
use serde_json::{json, Value};

async fn test_app(
    state: backend::AppState,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

async fn fetch_round_and_cookie<S>(app: &S) -> (Value, Cookie<'static>)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let resp = test::call_service(app, test::TestRequest::get().uri("/api/round").to_request())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .next()
        .expect("fresh session issues a cookie")
        .into_owned();
    let body: Value = test::read_body_json(resp).await;
    (body, cookie)
}

#[actix_web::test]
async fn health_endpoint_answers_ok() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn a_fresh_session_gets_a_masked_round_and_a_cookie() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;

    let (body, _cookie) = fetch_round_and_cookie(&app).await;
    assert_eq!(body["revealed"], "######");
    assert_eq!(body["tries_left"], 5);
    assert_eq!(body["phase"], "InProgress");
    assert_eq!(body["game_over"], false);
    // The target word is never disclosed before game-over.
    assert!(body.get("word").is_none());
}

#[actix_web::test]
async fn guessing_reveals_matches_and_counts_misses() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;
    let (_, cookie) = fetch_round_and_cookie(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/round/guess")
            .cookie(cookie.clone())
            .set_json(json!({"attempt": "a"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["revealed"], "#a#a##");
    assert_eq!(body["tries_left"], 5);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/round/guess")
            .cookie(cookie)
            .set_json(json!({"attempt": "z"}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["tries_left"], 4);
    assert_eq!(body["guessed"], "a, z");
    // One miss costs 50 points; a little wall-clock decay may apply on top.
    let score = body["score"].as_i64().unwrap();
    assert!(score <= 950 && score > 900, "unexpected score {score}");
}

#[actix_web::test]
async fn guessing_without_a_round_is_a_problem_response() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/round/guess")
            .set_json(json!({"attempt": "a"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "ROUND_NOT_FOUND");
    assert_eq!(body["status"], 404);
    assert!(body["type"].as_str().unwrap().ends_with("ROUND_NOT_FOUND"));
}

#[actix_web::test]
async fn a_won_round_reaches_the_leaderboard() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;
    let (_, cookie) = fetch_round_and_cookie(&app).await;

    for letter in ["c", "a", "r", "f", "e"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/round/guess")
                .cookie(cookie.clone())
                .set_json(json!({"attempt": letter}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/round")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["won"], true);
    assert_eq!(body["phase"], "Won");
    assert_eq!(body["word"], "carafe");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/round/player")
            .cookie(cookie.clone())
            .set_json(json!({"name": "alice"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/round/score")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["submitted"], true);

    // A second submission never persists again.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/round/score")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["submitted"], false);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/scores").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let scores: Value = test::read_body_json(resp).await;
    let scores = scores.as_array().unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["player_name"], "alice");
    assert_eq!(scores[0]["word"], "carafe");
}

#[actix_web::test]
async fn the_leaderboard_starts_empty() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/scores").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let scores: Value = test::read_body_json(resp).await;
    assert_eq!(scores.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn the_score_endpoint_reports_the_decayed_score() {
    let state = support::sqlite_state(&["carafe"]).await;
    let app = test_app(state).await;
    let (_, cookie) = fetch_round_and_cookie(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/round/score")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let score = body["score"].as_i64().unwrap();
    assert!(score <= 1000 && score > 950, "unexpected score {score}");
}

use actix_web::web;

pub mod health;
pub mod rounds;
pub mod scores;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under the same paths with the CORS
/// middleware on top. For tests we register the same paths without that
/// wrapper so that endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Round routes: /api/round/**
    cfg.service(web::scope("/api/round").configure(rounds::configure_routes));

    // Leaderboard routes: /api/scores
    cfg.service(web::scope("/api/scores").configure(scores::configure_routes));
}

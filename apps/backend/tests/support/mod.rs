//! Shared helpers for integration tests.

use backend::AppState;
use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database};

/// Fresh in-memory SQLite state with the schema applied.
pub async fn sqlite_state(words: &[&str]) -> AppState {
    backend_test_support::test_logging::init();

    // A single pooled connection: every pool member would otherwise open
    // its own private in-memory database.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    migrate(&conn, MigrationCommand::Up)
        .await
        .expect("apply migrations");

    AppState::new(conn, words.iter().map(|w| (*w).to_string()).collect())
}

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::session::store::SessionStore;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Per-session round snapshots
    sessions: SessionStore,
    /// Candidate word pool, loaded once at startup
    words: Arc<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with the given database connection and word pool
    pub fn new(db: DatabaseConnection, words: Vec<String>) -> Self {
        Self {
            db: Some(db),
            sessions: SessionStore::new(),
            words: Arc::new(words),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(words: Vec<String>) -> Self {
        Self {
            db: None,
            sessions: SessionStore::new(),
            words: Arc::new(words),
        }
    }

    /// The database connection, or `DbUnavailable` when none is configured
    pub fn db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::db_unavailable("no database connection configured".to_string()))
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn words(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.words)
    }
}

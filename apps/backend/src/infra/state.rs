use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    words: Vec<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            words: Vec::new(),
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_words(mut self, words: Vec<String>) -> Self {
        self.words = words;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(profile) = self.db_profile {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(profile).await?;
            Ok(AppState::new(conn, self.words))
        } else {
            Ok(AppState::without_db(self.words))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state()
            .with_words(vec!["carafe".to_string()])
            .build()
            .await
            .unwrap();
        assert!(state.db().is_err());
        assert_eq!(state.words().len(), 1);
        assert_eq!(state.words()[0], "carafe");
    }
}

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Default listen port, matching the historical deployment.
const DEFAULT_PORT: u16 = 3030;

/// Runtime settings for the HTTP server and the word source.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Word-list file, one word per line (optional `word` CSV header).
    pub words_file: PathBuf,
}

impl AppConfig {
    /// Read the configuration from environment variables.
    ///
    /// `BACKEND_HOST` defaults to `0.0.0.0`, `BACKEND_PORT` to 3030, and
    /// `WORDS_FILE` to `words_fr.txt` in the working directory.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let words_file =
            PathBuf::from(env::var("WORDS_FILE").unwrap_or_else(|_| "words_fr.txt".to_string()));

        Ok(Self {
            host,
            port,
            words_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::AppConfig;

    fn clear_test_env() {
        env::remove_var("BACKEND_HOST");
        env::remove_var("BACKEND_PORT");
        env::remove_var("WORDS_FILE");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_test_env();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3030);
        assert_eq!(config.words_file.to_str(), Some("words_fr.txt"));
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_a_config_error() {
        clear_test_env();
        env::set_var("BACKEND_PORT", "not-a-port");
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("BACKEND_PORT"));
        clear_test_env();
    }
}

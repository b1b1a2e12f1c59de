//! Word source: pool loading and word-of-day assignment.

use std::path::Path;

use rand::Rng;
use sea_orm::DatabaseTransaction;
use time::Date;
use tracing::{info, warn};

use crate::domain::words::{choose_word, DEFAULT_WORD};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::daily_words;

/// Load the candidate word pool from a word-list file.
///
/// One word per line; a leading `word` CSV header line is skipped; entries
/// are lowercased and blank lines ignored.
pub fn load_pool(path: &Path) -> Result<Vec<String>, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Io,
            format!("failed to read word list {}: {e}", path.display()),
        )
    })?;

    let mut pool = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if i == 0 && entry.eq_ignore_ascii_case("word") {
            // CSV header
            continue;
        }
        pool.push(entry.to_lowercase());
    }

    if pool.is_empty() {
        warn!("word list {} holds no words", path.display());
    } else {
        info!("word pool loaded: {} entries", pool.len());
    }
    Ok(pool)
}

/// The word assigned to `today`, assigning one first if needed.
///
/// Stable for the whole calendar day. Falls back to a fixed default word
/// when the pool is empty, so the daily game never goes dark.
pub async fn word_of_day<R: Rng>(
    txn: &DatabaseTransaction,
    pool: &[String],
    today: Date,
    rng: &mut R,
) -> Result<String, DomainError> {
    if let Some(assigned) = daily_words::find_by_day(txn, today).await? {
        return Ok(assigned.word);
    }

    let word = match choose_word(pool, rng) {
        Ok(word) => word,
        Err(DomainError::EmptyPool) => {
            warn!("word pool is empty, assigning the default word");
            DEFAULT_WORD.to_string()
        }
        Err(e) => return Err(e),
    };

    let assigned = daily_words::assign(txn, today, &word).await?;
    info!(day = %assigned.day, "word of day assigned");
    Ok(assigned.word)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use crate::errors::domain::DomainError;

    use super::load_pool;

    #[test]
    fn load_pool_skips_the_header_and_blank_lines_and_lowercases() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "word").unwrap();
        writeln!(file, "Carafe").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  damien  ").unwrap();
        file.flush().unwrap();

        let pool = load_pool(file.path()).unwrap();
        assert_eq!(pool, vec!["carafe".to_string(), "damien".to_string()]);
    }

    #[test]
    fn load_pool_keeps_the_first_word_when_there_is_no_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "carafe").unwrap();
        writeln!(file, "damien").unwrap();
        file.flush().unwrap();

        let pool = load_pool(file.path()).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0], "carafe");
    }

    #[test]
    fn load_pool_surfaces_io_failures() {
        let err = load_pool(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DomainError::Infra(_, _)));
    }
}

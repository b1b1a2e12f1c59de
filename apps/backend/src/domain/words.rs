//! Word selection from the candidate pool.

use rand::Rng;

use crate::errors::domain::DomainError;

/// Fallback word assigned when the backing pool is empty, so the daily game
/// never goes dark.
pub const DEFAULT_WORD: &str = "pendu";

/// Pick a word uniformly at random from a non-empty pool, lowercased.
pub fn choose_word<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Result<String, DomainError> {
    if pool.is_empty() {
        return Err(DomainError::EmptyPool);
    }
    let idx = rng.random_range(0..pool.len());
    Ok(pool[idx].to_lowercase())
}

//! Word-of-day assignment tests against in-memory SQLite.

mod support;

use backend::db::txn::with_txn;
use backend::domain::DEFAULT_WORD;
use backend::services::words::word_of_day;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::macros::date;
use time::Date;

async fn word_for(state: &backend::AppState, pool: &[&str], day: Date, seed: u64) -> String {
    let pool: Vec<String> = pool.iter().map(|w| (*w).to_string()).collect();
    with_txn(state, |txn| {
        Box::pin(async move {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Ok(word_of_day(txn, &pool, day, &mut rng).await?)
        })
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn the_word_is_stable_for_the_whole_day() {
    let state = support::sqlite_state(&[]).await;
    let day = date!(2026 - 08 - 07);
    let pool = ["carafe", "damien", "maison", "jardin"];

    let first = word_for(&state, &pool, day, 1).await;
    // A different RNG seed must not matter once the word is assigned.
    let second = word_for(&state, &pool, day, 99).await;
    assert_eq!(first, second);
    assert!(pool.contains(&first.as_str()));
}

#[tokio::test]
async fn each_day_gets_its_own_assignment() {
    let state = support::sqlite_state(&[]).await;
    let pool = ["carafe"];

    let friday = word_for(&state, &pool, date!(2026 - 08 - 07), 1).await;
    let saturday = word_for(&state, &pool, date!(2026 - 08 - 08), 1).await;
    // Single-word pool: both days resolve to it, through distinct rows.
    assert_eq!(friday, "carafe");
    assert_eq!(saturday, "carafe");
}

#[tokio::test]
async fn an_empty_pool_falls_back_to_the_default_word() {
    let state = support::sqlite_state(&[]).await;
    let day = date!(2026 - 08 - 07);

    let word = word_for(&state, &[], day, 1).await;
    assert_eq!(word, DEFAULT_WORD);
    // And the fallback is persisted like any other assignment.
    let again = word_for(&state, &["carafe"], day, 1).await;
    assert_eq!(again, DEFAULT_WORD);
}

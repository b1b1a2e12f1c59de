use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::words::choose_word;
use crate::errors::domain::DomainError;

fn pool(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn choosing_from_an_empty_pool_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = choose_word(&[], &mut rng).unwrap_err();
    assert_eq!(err, DomainError::EmptyPool);
}

#[test]
fn chosen_word_is_lowercased() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let word = choose_word(&pool(&["CARAFE"]), &mut rng).unwrap();
    assert_eq!(word, "carafe");
}

#[test]
fn chosen_word_is_always_a_pool_member() {
    let pool = pool(&["carafe", "damien", "pendu"]);
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let word = choose_word(&pool, &mut rng).unwrap();
        assert!(pool.contains(&word), "{word} not in pool");
    }
}

#[test]
fn every_pool_member_is_eventually_chosen() {
    let pool = pool(&["carafe", "damien", "pendu"]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..200 {
        seen.insert(choose_word(&pool, &mut rng).unwrap());
    }
    assert_eq!(seen.len(), pool.len());
}

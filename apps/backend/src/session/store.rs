//! In-memory session carrier for round snapshots.
//!
//! Each session owns at most one serialized round. Every request loads the
//! snapshot, rebuilds the Round, mutates it, and writes the snapshot back;
//! read-modify-write is not concurrent within a single session, so the map
//! only has to survive concurrent access across *different* sessions.

use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::snapshot::RoundSnapshot;

#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, RoundSnapshot>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot stored for `key`, if any.
    pub fn load(&self, key: &str) -> Option<RoundSnapshot> {
        self.inner.get(key).map(|entry| entry.clone())
    }

    /// Store `snapshot` under `key`, replacing any previous round.
    pub fn save(&self, key: &str, snapshot: RoundSnapshot) {
        self.inner.insert(key.to_string(), snapshot);
    }

    pub fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::SessionStore;
    use crate::domain::round::Round;

    #[test]
    fn save_then_load_returns_the_snapshot() {
        let store = SessionStore::new();
        let round = Round::new("carafe", datetime!(2026-08-07 10:00:00 UTC)).unwrap();

        assert_eq!(store.load("s1"), None);
        store.save("s1", round.snapshot());
        assert_eq!(store.load("s1"), Some(round.snapshot()));
        // Sessions are independent.
        assert_eq!(store.load("s2"), None);
    }

    #[test]
    fn save_replaces_and_remove_clears() {
        let store = SessionStore::new();
        let t0 = datetime!(2026-08-07 10:00:00 UTC);
        let first = Round::new("carafe", t0).unwrap();
        let second = Round::new("damien", t0).unwrap();

        store.save("s1", first.snapshot());
        store.save("s1", second.snapshot());
        assert_eq!(store.load("s1"), Some(second.snapshot()));

        store.remove("s1");
        assert_eq!(store.load("s1"), None);
    }
}

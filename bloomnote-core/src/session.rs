//! The page state controller.
//!
//! A [`PageSession`] owns the four pieces of page state: the bloom selected
//! for this load, the secret letter visibility, the miss counter, and the
//! nickname. The counter and nickname hydrate from the injected store at
//! construction and write back on every change; everything else resets on
//! each fresh load.

use crate::bloom::{Bloom, bloom_pool};
use crate::constants::{DEFAULT_NICKNAME, EMPTY_NICKNAME_ADDRESS, MISS_COUNT_KEY, NICKNAME_KEY};
use crate::storage::KeyValueStore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Clone)]
pub struct PageSession<S: KeyValueStore> {
    store: S,
    bloom: Bloom,
    secret_open: bool,
    cuckoo_singing: bool,
    miss_count: u32,
    nickname: String,
}

impl<S: KeyValueStore> PageSession<S> {
    /// Start a fresh session: pick the bloom for this load and hydrate the
    /// persisted counter and nickname from the store.
    ///
    /// The bloom is chosen here, once, so it cannot change mid-session.
    /// Missing or malformed stored values silently keep their defaults.
    pub fn new(store: S, entropy: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(entropy);
        let bloom = bloom_pool().pick(&mut rng).clone();
        let mut session = Self {
            store,
            bloom,
            secret_open: false,
            cuckoo_singing: true,
            miss_count: 0,
            nickname: DEFAULT_NICKNAME.to_string(),
        };
        session.hydrate();
        session
    }

    fn hydrate(&mut self) {
        if let Some(raw) = self.store.get(MISS_COUNT_KEY) {
            match raw.parse::<u32>() {
                Ok(count) => self.miss_count = count,
                Err(_) => log::warn!("ignoring malformed stored miss count: {raw:?}"),
            }
        }
        if let Some(name) = self.store.get(NICKNAME_KEY) {
            self.nickname = name;
        }
    }

    /// The bloom selected for this session.
    #[must_use]
    pub fn bloom(&self) -> &Bloom {
        &self.bloom
    }

    #[must_use]
    pub fn secret_open(&self) -> bool {
        self.secret_open
    }

    #[must_use]
    pub fn cuckoo_singing(&self) -> bool {
        self.cuckoo_singing
    }

    #[must_use]
    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The nickname as addressed in page copy; "you" when cleared.
    #[must_use]
    pub fn display_nickname(&self) -> &str {
        if self.nickname.is_empty() {
            EMPTY_NICKNAME_ADDRESS
        } else {
            &self.nickname
        }
    }

    /// Show or hide the secret letter. Calling twice restores the original state.
    pub fn toggle_secret(&mut self) {
        self.secret_open = !self.secret_open;
    }

    /// Pause or resume the cuckoo. Purely cosmetic, never persisted.
    pub fn toggle_cuckoo(&mut self) {
        self.cuckoo_singing = !self.cuckoo_singing;
    }

    /// Count one more miss and persist the new total.
    pub fn record_miss(&mut self) {
        self.miss_count = self.miss_count.saturating_add(1);
        self.store.set(MISS_COUNT_KEY, &self.miss_count.to_string());
    }

    /// Replace the nickname with the literal value and persist it.
    ///
    /// No trimming, no length limit; an empty string is kept and persisted
    /// as-is.
    pub fn set_nickname(&mut self, value: &str) {
        self.nickname = value.to_string();
        self.store.set(NICKNAME_KEY, &self.nickname);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh_session(store: &MemoryStore) -> PageSession<MemoryStore> {
        PageSession::new(store.clone(), 7)
    }

    #[test]
    fn fresh_session_uses_defaults_when_store_is_empty() {
        let session = fresh_session(&MemoryStore::new());
        assert_eq!(session.miss_count(), 0);
        assert_eq!(session.nickname(), "bestie");
        assert!(!session.secret_open());
        assert!(session.cuckoo_singing());
    }

    #[test]
    fn session_bloom_comes_from_the_pool_and_is_stable() {
        let session = fresh_session(&MemoryStore::new());
        assert!(
            bloom_pool()
                .blooms
                .iter()
                .any(|bloom| bloom == session.bloom())
        );
        let same_entropy = PageSession::new(MemoryStore::new(), 7);
        assert_eq!(session.bloom(), same_entropy.bloom());
    }

    #[test]
    fn every_bloom_is_selectable_over_many_loads() {
        let store = MemoryStore::new();
        let mut seen = std::collections::HashSet::new();
        for entropy in 0..500 {
            let session = PageSession::new(store.clone(), entropy);
            seen.insert(session.bloom().name.clone());
        }
        assert_eq!(seen.len(), bloom_pool().len());
    }

    #[test]
    fn hydrates_stored_count_and_nickname() {
        let store = MemoryStore::new();
        store.set(MISS_COUNT_KEY, "7");
        store.set(NICKNAME_KEY, "Lumi");
        let session = fresh_session(&store);
        assert_eq!(session.miss_count(), 7);
        assert_eq!(session.nickname(), "Lumi");
    }

    #[test]
    fn malformed_stored_count_falls_back_to_zero() {
        let store = MemoryStore::new();
        store.set(MISS_COUNT_KEY, "not-a-number");
        let session = fresh_session(&store);
        assert_eq!(session.miss_count(), 0);
    }

    #[test]
    fn record_miss_accumulates_and_persists() {
        let store = MemoryStore::new();
        let mut session = fresh_session(&store);
        for expected in 1..=5 {
            session.record_miss();
            assert_eq!(session.miss_count(), expected);
        }
        assert_eq!(store.get(MISS_COUNT_KEY), Some("5".to_string()));
    }

    #[test]
    fn set_nickname_updates_memory_and_store() {
        let store = MemoryStore::new();
        let mut session = fresh_session(&store);
        session.set_nickname("Lumi");
        assert_eq!(session.nickname(), "Lumi");
        assert_eq!(store.get(NICKNAME_KEY), Some("Lumi".to_string()));
    }

    #[test]
    fn empty_nickname_persists_but_displays_as_you() {
        let store = MemoryStore::new();
        let mut session = fresh_session(&store);
        session.set_nickname("");
        assert_eq!(session.nickname(), "");
        assert_eq!(store.get(NICKNAME_KEY), Some(String::new()));
        assert_eq!(session.display_nickname(), "you");
    }

    #[test]
    fn toggle_secret_is_an_involution() {
        let mut session = fresh_session(&MemoryStore::new());
        assert!(!session.secret_open());
        session.toggle_secret();
        assert!(session.secret_open());
        session.toggle_secret();
        assert!(!session.secret_open());
    }

    #[test]
    fn toggle_cuckoo_never_touches_the_store() {
        let store = MemoryStore::new();
        let mut session = fresh_session(&store);
        session.toggle_cuckoo();
        assert!(!session.cuckoo_singing());
        session.toggle_cuckoo();
        assert!(session.cuckoo_singing());
        assert_eq!(store.get(MISS_COUNT_KEY), None);
        assert_eq!(store.get(NICKNAME_KEY), None);
    }

    #[test]
    fn count_survives_a_reload_over_the_same_store() {
        let store = MemoryStore::new();
        let mut session = fresh_session(&store);
        session.record_miss();
        session.record_miss();
        assert_eq!(store.get(MISS_COUNT_KEY), Some("2".to_string()));

        let reloaded = fresh_session(&store);
        assert_eq!(reloaded.miss_count(), 2);
        assert_eq!(reloaded.nickname(), "bestie");
        assert!(!reloaded.secret_open());
    }
}

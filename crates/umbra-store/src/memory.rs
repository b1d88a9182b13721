//! In-memory theme store.

use std::collections::HashMap;
use std::sync::Mutex;

use umbra_engine::ThemeMode;

use crate::{SiteKey, StoreError, ThemeStore};

/// A theme store held entirely in memory.
///
/// Used by tests and by hosts that sync preferences through their own
/// channel. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, ThemeMode>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, site: &SiteKey) -> Result<Option<ThemeMode>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&site.storage_key())
            .copied())
    }

    fn save(&self, site: &SiteKey, mode: ThemeMode) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(site.storage_key(), mode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_of_unknown_site_is_none() {
        let store = MemoryStore::new();
        let site = SiteKey::from_hostname("example.com");
        assert_eq!(store.load(&site).unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let site = SiteKey::from_hostname("example.com");

        store.save(&site, ThemeMode::Dark).unwrap();
        assert_eq!(store.load(&site).unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn save_overwrites_previous_record() {
        let store = MemoryStore::new();
        let site = SiteKey::from_hostname("example.com");

        store.save(&site, ThemeMode::Dark).unwrap();
        store.save(&site, ThemeMode::Reset).unwrap();
        assert_eq!(store.load(&site).unwrap(), Some(ThemeMode::Reset));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sites_are_independent() {
        let store = MemoryStore::new();
        store
            .save(&SiteKey::from_hostname("a.example"), ThemeMode::Dark)
            .unwrap();
        store
            .save(&SiteKey::from_hostname("b.example"), ThemeMode::Light)
            .unwrap();

        assert_eq!(
            store.load(&SiteKey::from_hostname("a.example")).unwrap(),
            Some(ThemeMode::Dark)
        );
        assert_eq!(
            store.load(&SiteKey::from_hostname("b.example")).unwrap(),
            Some(ThemeMode::Light)
        );
    }
}

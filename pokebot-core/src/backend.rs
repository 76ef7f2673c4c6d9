//! Mock implementation of the persistence port.
//!
//! Every call waits a fixed latency and then reads or writes JSON documents
//! in a [`KeyValueStore`]. Records live at `pokebot.{collection}.{id}`; each
//! collection keeps an ordered id index and an id sequence next to them.

use crate::catalog::{Channel, mock_channels};
use crate::{ConfigPort, KeyValueStore, Record, Sleeper};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

const KEY_PREFIX: &str = "pokebot";

#[derive(Debug, Error)]
pub enum PortError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// In-memory key/value store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Sleeper that resolves immediately; used by tests and the native tester.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Sleeper for NoDelay {
    async fn sleep_ms(&self, _duration_ms: u32) {}
}

/// Simulated round-trip times in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub read_ms: u32,
    pub write_ms: u32,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            read_ms: 1000,
            write_ms: 1500,
        }
    }
}

/// Latency-simulating backend over any [`KeyValueStore`].
pub struct MockBackend<S, T> {
    store: S,
    sleeper: T,
    latency: Latency,
    fail_next: Cell<Option<String>>,
}

impl<S, T> MockBackend<S, T>
where
    S: KeyValueStore,
    T: Sleeper,
{
    pub fn new(store: S, sleeper: T) -> Self {
        Self {
            store,
            sleeper,
            latency: Latency::default(),
            fail_next: Cell::new(None),
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    /// Make the next port call fail with `reason`. Lets callers exercise
    /// their failure arm against the mock.
    pub fn fail_next_with(&self, reason: impl Into<String>) {
        self.fail_next.set(Some(reason.into()));
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    fn check_injected_failure(&self) -> Result<(), PortError> {
        match self.fail_next.take() {
            Some(reason) => Err(PortError::Rejected(reason)),
            None => Ok(()),
        }
    }

    fn storage_err(err: &S::Error) -> PortError {
        PortError::Storage(err.to_string())
    }

    fn record_key<R: Record>(id: &str) -> String {
        format!("{KEY_PREFIX}.{}.{id}", R::COLLECTION)
    }

    fn index_key<R: Record>() -> String {
        format!("{KEY_PREFIX}.{}.index", R::COLLECTION)
    }

    fn sequence_key<R: Record>() -> String {
        format!("{KEY_PREFIX}.{}.seq", R::COLLECTION)
    }

    fn read_index<R: Record>(&self) -> Result<Vec<String>, PortError> {
        let raw = self
            .store
            .get(&Self::index_key::<R>())
            .map_err(|e| Self::storage_err(&e))?;
        match raw {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_index<R: Record>(&self, ids: &[String]) -> Result<(), PortError> {
        let raw = serde_json::to_string(ids)?;
        self.store
            .set(&Self::index_key::<R>(), &raw)
            .map_err(|e| Self::storage_err(&e))
    }

    fn next_id<R: Record>(&self) -> Result<String, PortError> {
        let key = Self::sequence_key::<R>();
        let current = self
            .store
            .get(&key)
            .map_err(|e| Self::storage_err(&e))?
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0);
        let next = current + 1;
        self.store
            .set(&key, &next.to_string())
            .map_err(|e| Self::storage_err(&e))?;
        Ok(format!("{}-{next}", R::ID_PREFIX))
    }

    fn write_record<R: Record>(&self, mut record: R) -> Result<R, PortError> {
        let id = match record.record_id() {
            Some(id) => id.to_string(),
            None => {
                let id = self.next_id::<R>()?;
                record.assign_id(id.clone());
                id
            }
        };
        let raw = serde_json::to_string(&record)?;
        self.store
            .set(&Self::record_key::<R>(&id), &raw)
            .map_err(|e| Self::storage_err(&e))?;
        let mut index = self.read_index::<R>()?;
        if !index.contains(&id) {
            index.push(id);
            self.write_index::<R>(&index)?;
        }
        Ok(record)
    }

    fn read_record<R: Record>(&self, id: &str) -> Result<Option<R>, PortError> {
        let raw = self
            .store
            .get(&Self::record_key::<R>(id))
            .map_err(|e| Self::storage_err(&e))?;
        raw.map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(PortError::from)
    }

    fn remove_record<R: Record>(&self, id: &str) -> Result<(), PortError> {
        self.store
            .remove(&Self::record_key::<R>(id))
            .map_err(|e| Self::storage_err(&e))?;
        let mut index = self.read_index::<R>()?;
        index.retain(|existing| existing != id);
        self.write_index::<R>(&index)
    }
}

#[async_trait(?Send)]
impl<S, T> ConfigPort for MockBackend<S, T>
where
    S: KeyValueStore,
    T: Sleeper,
{
    type Error = PortError;

    async fn save<R: Record>(&self, record: R) -> Result<R, Self::Error> {
        self.sleeper.sleep_ms(self.latency.write_ms).await;
        self.check_injected_failure()?;
        let saved = self.write_record(record)?;
        log::info!(
            "saved {} record {}",
            R::COLLECTION,
            saved.record_id().unwrap_or_default()
        );
        Ok(saved)
    }

    async fn save_all<R: Record>(&self, records: Vec<R>) -> Result<Vec<R>, Self::Error> {
        self.sleeper.sleep_ms(self.latency.write_ms).await;
        self.check_injected_failure()?;
        let previous = self.read_index::<R>()?;
        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            saved.push(self.write_record(record)?);
        }
        let kept: Vec<String> = saved
            .iter()
            .filter_map(|record| record.record_id().map(str::to_string))
            .collect();
        for stale in previous.iter().filter(|id| !kept.contains(id)) {
            self.store
                .remove(&Self::record_key::<R>(stale))
                .map_err(|e| Self::storage_err(&e))?;
        }
        self.write_index::<R>(&kept)?;
        log::info!("saved {} {} records", saved.len(), R::COLLECTION);
        Ok(saved)
    }

    async fn load<R: Record>(&self, id: &str) -> Result<Option<R>, Self::Error> {
        self.sleeper.sleep_ms(self.latency.read_ms).await;
        self.check_injected_failure()?;
        self.read_record(id)
    }

    async fn list<R: Record>(&self) -> Result<Vec<R>, Self::Error> {
        self.sleeper.sleep_ms(self.latency.read_ms).await;
        self.check_injected_failure()?;
        let mut records = Vec::new();
        for id in self.read_index::<R>()? {
            if let Some(record) = self.read_record(&id)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn delete<R: Record>(&self, id: &str) -> Result<(), Self::Error> {
        self.sleeper.sleep_ms(self.latency.write_ms).await;
        self.check_injected_failure()?;
        self.remove_record::<R>(id)
    }

    async fn channels(&self) -> Result<Vec<Channel>, Self::Error> {
        self.sleeper.sleep_ms(self.latency.read_ms).await;
        self.check_injected_failure()?;
        Ok(mock_channels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::{ShopItem, Stock};
    use crate::spawn::SpawnConfig;
    use futures::executor::block_on;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingSleeper {
        waits: Rc<RefCell<Vec<u32>>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep_ms(&self, duration_ms: u32) {
            self.waits.borrow_mut().push(duration_ms);
        }
    }

    #[test]
    fn every_call_waits_the_configured_latency() {
        let sleeper = RecordingSleeper::default();
        let backend = MockBackend::new(MemoryStore::default(), sleeper.clone());
        let _ = block_on(backend.channels()).unwrap();
        let _ = block_on(backend.save(SpawnConfig::new_draft())).unwrap();
        assert_eq!(*sleeper.waits.borrow(), vec![1000, 1500]);
    }

    #[test]
    fn ids_are_sequential_per_collection() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let a = block_on(backend.save(SpawnConfig::new_draft())).unwrap();
        let b = block_on(backend.save(SpawnConfig::new_draft())).unwrap();
        assert_eq!(a.id.as_deref(), Some("spawn-1"));
        assert_eq!(b.id.as_deref(), Some("spawn-2"));
    }

    #[test]
    fn resaving_keeps_the_id_and_does_not_duplicate_the_index() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let mut saved = block_on(backend.save(SpawnConfig::new_draft())).unwrap();
        saved.name = "Renamed".to_string();
        let again = block_on(backend.save(saved.clone())).unwrap();
        assert_eq!(again.id, saved.id);
        let all: Vec<SpawnConfig> = block_on(backend.list()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Renamed");
    }

    #[test]
    fn injected_failure_surfaces_once() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        backend.fail_next_with("backend offline");
        let err = block_on(backend.save(SpawnConfig::new_draft())).unwrap_err();
        assert!(matches!(err, PortError::Rejected(ref reason) if reason == "backend offline"));
        assert!(block_on(backend.save(SpawnConfig::new_draft())).is_ok());
    }

    #[test]
    fn save_all_replaces_collection_and_drops_stale_records() {
        let store = MemoryStore::default();
        let backend = MockBackend::new(store.clone(), NoDelay);
        let first = vec![
            ShopItem::new("Potion", 300, Stock::Limited(5)),
            ShopItem::new("Revive", 1500, Stock::Unlimited),
        ];
        let saved = block_on(backend.save_all(first)).unwrap();
        assert!(saved.iter().all(|item| item.id.is_some()));

        let keep = vec![saved[1].clone()];
        let resaved = block_on(backend.save_all(keep)).unwrap();
        assert_eq!(resaved.len(), 1);
        let listed: Vec<ShopItem> = block_on(backend.list()).unwrap();
        assert_eq!(listed, resaved);
        assert!(!store.keys().iter().any(|k| k.ends_with(".shop-1")));
    }

    #[test]
    fn corrupt_record_reports_serialization_error() {
        let store = MemoryStore::default();
        store.set("pokebot.spawn-configs.index", r#"["spawn-1"]"#).unwrap();
        store.set("pokebot.spawn-configs.spawn-1", "{not json").unwrap();
        let backend = MockBackend::new(store, NoDelay);
        let err = block_on(backend.list::<SpawnConfig>()).unwrap_err();
        assert!(matches!(err, PortError::Serialization(_)));
    }
}

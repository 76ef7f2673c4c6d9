//! PokéBot Dashboard Core
//!
//! Platform-agnostic logic for the PokéBot admin dashboard: wizard step
//! navigation, configuration drafts and their validation, the persistence
//! port, Pokédex loading and derivations, and the mock live feeds.
//! This crate carries no browser or UI dependencies.

pub mod ai;
pub mod backend;
pub mod catalog;
pub mod events;
pub mod feed;
pub mod form;
pub mod items;
pub mod nav;
pub mod pokedex;
pub mod prefs;
pub mod settings;
pub mod shop;
pub mod spawn;
pub mod steps;
pub mod terminal;
pub mod theme;
pub mod uploads;
pub mod users;
pub mod wizard;

// Re-export commonly used types
pub use ai::{AiConfig, AiRoster, AiStep, BattleUiSettings, Difficulty, PokemonSlot, RewardItem};
pub use backend::{Latency, MemoryStore, MockBackend, NoDelay, PortError};
pub use catalog::{Channel, Rarity};
pub use events::{EventDraft, EventFieldError, EventKind, EventStatus, Recurrence, ScheduledEvent};
pub use feed::{FeedEntry, FeedGenerator, FeedKind, FeedLog};
pub use items::{ItemConfig, ItemStep, QuantityRange};
pub use prefs::{PreferenceError, PreferenceStore};
pub use settings::{DashboardSettings, MessageSetting};
pub use shop::{ShopCatalog, ShopItem, ShopItemDraft, ShopItemError, Stock};
pub use spawn::{SpawnConfig, SpawnStep};
pub use steps::{StepNavigator, StepState, WizardStep};
pub use terminal::{BotStatus, TerminalEntry, TerminalEntryKind, TerminalSession};
pub use theme::{ColorPalette, ThemeMode, UiPreferences};
pub use wizard::{ChannelLoad, SaveStatus};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Synchronous string key/value storage (browser `localStorage` or memory).
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a raw value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the removal.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Timer abstraction used to simulate backend latency.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep_ms(&self, duration_ms: u32);
}

/// A persistable configuration entity.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage namespace for this entity kind.
    const COLLECTION: &'static str;
    /// Prefix for ids handed out by the backend.
    const ID_PREFIX: &'static str;

    /// The persisted id, or `None` for a draft that was never saved.
    fn record_id(&self) -> Option<&str>;

    /// Attach a backend-assigned id.
    fn assign_id(&mut self, id: String);
}

/// Persistence port the dashboard pages call through.
///
/// The bundled [`MockBackend`] simulates latency over a [`KeyValueStore`];
/// a real network client can implement the same trait without touching
/// call sites.
#[async_trait(?Send)]
pub trait ConfigPort {
    type Error: std::error::Error + 'static;

    /// Persist `record`, assigning an id when it has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects or cannot store the record.
    async fn save<R: Record>(&self, record: R) -> Result<R, Self::Error>;

    /// Persist a whole collection in one call, returning the stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if any record cannot be stored.
    async fn save_all<R: Record>(&self, records: Vec<R>) -> Result<Vec<R>, Self::Error>;

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value cannot be read or decoded.
    async fn load<R: Record>(&self, id: &str) -> Result<Option<R>, Self::Error>;

    /// Fetch every record of a collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or decoded.
    async fn list<R: Record>(&self) -> Result<Vec<R>, Self::Error>;

    /// Remove a record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    async fn delete<R: Record>(&self, id: &str) -> Result<(), Self::Error>;

    /// Channels the bot can post to.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel list cannot be fetched.
    async fn channels(&self) -> Result<Vec<Channel>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn spawn_config_roundtrips_through_mock_backend() {
        let store = MemoryStore::default();
        let backend = MockBackend::new(store.clone(), NoDelay);

        let mut draft = SpawnConfig::new_draft();
        draft.toggle_channel("channel-1");
        draft.add_to_roster(Rarity::Common, "Pidgey");
        draft.set_percentage(Rarity::Common, "100");
        draft.name = "Test".to_string();
        assert!(draft.is_complete(true));

        let saved = block_on(backend.save(draft.clone())).unwrap();
        let id = saved.id.clone().expect("id assigned");
        let loaded: SpawnConfig = block_on(backend.load(&id)).unwrap().expect("stored");
        assert_eq!(loaded, saved);
        assert_eq!(loaded.name, draft.name);
        assert_eq!(loaded.selected_channel_ids, draft.selected_channel_ids);
        assert_eq!(loaded.time_between_spawns, 30);
        assert_eq!(loaded.time_to_flee, 15);
        assert_eq!(loaded.shiny_chance, "1/4096");
        assert_eq!(loaded.pokemon_roster, draft.pokemon_roster);
        assert_eq!(loaded.rarity_percentages, draft.rarity_percentages);
        assert!(!store.is_empty());
    }

    #[test]
    fn list_and_delete_follow_insertion_order() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let first = block_on(backend.save(ShopItem::new("Potion", 300, Stock::Limited(5)))).unwrap();
        let second =
            block_on(backend.save(ShopItem::new("Revive", 1500, Stock::Unlimited))).unwrap();

        let listed: Vec<ShopItem> = block_on(backend.list()).unwrap();
        assert_eq!(listed, vec![first.clone(), second.clone()]);

        block_on(backend.delete::<ShopItem>(first.id.as_deref().unwrap())).unwrap();
        let listed: Vec<ShopItem> = block_on(backend.list()).unwrap();
        assert_eq!(listed, vec![second]);
    }
}

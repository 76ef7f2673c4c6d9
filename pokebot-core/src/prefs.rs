//! Browser preference documents kept directly in key/value storage.
//!
//! These four keys are read and written synchronously by the pages that own
//! them, outside the latency-simulating backend.

use crate::KeyValueStore;
use crate::settings::DashboardSettings;
use crate::theme::{ColorPalette, ThemeMode, UiPreferences};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DASHBOARD_SETTINGS_KEY: &str = "dashboardBotSettings";
pub const PALETTE_KEY: &str = "colorfyPalette";
pub const UI_PREFERENCES_KEY: &str = "uiCustomizationSettings";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.store
            .get(key)
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.store
            .set(key, value)
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }

    /// Stored document, or `None` when absent or unreadable as `T`.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PreferenceError> {
        Ok(self.read_raw(key)?.and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|err| log::warn!("Ignoring unreadable '{key}': {err}"))
                .ok()
        }))
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string(value)?;
        self.write_raw(key, &raw)
    }

    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn dashboard_settings(&self) -> Result<DashboardSettings, PreferenceError> {
        Ok(self
            .read_raw(DASHBOARD_SETTINGS_KEY)?
            .map_or_else(DashboardSettings::default, |raw| {
                DashboardSettings::from_stored(&raw)
            }))
    }

    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or stored.
    pub fn save_dashboard_settings(
        &self,
        settings: &DashboardSettings,
    ) -> Result<(), PreferenceError> {
        self.write_json(DASHBOARD_SETTINGS_KEY, settings)
    }

    /// The saved palette, if one was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn palette(&self) -> Result<Option<ColorPalette>, PreferenceError> {
        self.read_json(PALETTE_KEY)
    }

    /// # Errors
    ///
    /// Returns an error if the palette cannot be serialized or stored.
    pub fn save_palette(&self, palette: &ColorPalette) -> Result<(), PreferenceError> {
        self.write_json(PALETTE_KEY, palette)
    }

    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn ui_preferences(&self) -> Result<UiPreferences, PreferenceError> {
        Ok(self.read_json(UI_PREFERENCES_KEY)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns an error if the preferences cannot be serialized or stored.
    pub fn save_ui_preferences(&self, prefs: &UiPreferences) -> Result<(), PreferenceError> {
        self.write_json(UI_PREFERENCES_KEY, prefs)
    }

    /// The stored light/dark mode. Stored as a bare word, not JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn theme(&self) -> Result<Option<ThemeMode>, PreferenceError> {
        Ok(self
            .read_raw(THEME_KEY)?
            .and_then(|raw| ThemeMode::parse(raw.trim())))
    }

    /// # Errors
    ///
    /// Returns an error if storage rejects the write.
    pub fn set_theme(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        self.write_raw(THEME_KEY, mode.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::theme::ThemePreference;

    fn prefs() -> (MemoryStore, PreferenceStore<MemoryStore>) {
        let store = MemoryStore::default();
        (store.clone(), PreferenceStore::new(store))
    }

    #[test]
    fn missing_keys_give_defaults() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.dashboard_settings().unwrap(), DashboardSettings::default());
        assert_eq!(prefs.palette().unwrap(), None);
        assert_eq!(prefs.ui_preferences().unwrap(), UiPreferences::default());
        assert_eq!(prefs.theme().unwrap(), None);
    }

    #[test]
    fn documents_roundtrip_under_browser_keys() {
        let (store, prefs) = prefs();
        let mut settings = DashboardSettings::default();
        settings.server_id = "1234".into();
        prefs.save_dashboard_settings(&settings).unwrap();
        assert_eq!(prefs.dashboard_settings().unwrap(), settings);

        let palette = ColorPalette::for_mode(ThemeMode::Dark);
        prefs.save_palette(&palette).unwrap();
        assert_eq!(prefs.palette().unwrap(), Some(palette));

        let ui = UiPreferences {
            theme: ThemePreference::Dark,
            ..UiPreferences::default()
        };
        prefs.save_ui_preferences(&ui).unwrap();
        assert_eq!(prefs.ui_preferences().unwrap(), ui);

        prefs.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(prefs.theme().unwrap(), Some(ThemeMode::Dark));
        assert_eq!(
            store.keys(),
            [THEME_KEY, PALETTE_KEY, DASHBOARD_SETTINGS_KEY, UI_PREFERENCES_KEY]
                .iter()
                .map(ToString::to_string)
                .collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn unreadable_documents_are_ignored() {
        let (store, prefs) = prefs();
        store.set(PALETTE_KEY, "[1,2]").unwrap();
        store.set(THEME_KEY, "sepia").unwrap();
        store.set(UI_PREFERENCES_KEY, "nope").unwrap();
        assert_eq!(prefs.palette().unwrap(), None);
        assert_eq!(prefs.theme().unwrap(), None);
        assert_eq!(prefs.ui_preferences().unwrap(), UiPreferences::default());
    }
}

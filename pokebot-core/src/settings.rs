//! Bot settings edited on the dashboard settings page.

use crate::prefs::PreferenceStore;
use crate::wizard::SaveStatus;
use crate::{ConfigPort, KeyValueStore, Record};
use serde::{Deserialize, Serialize};

pub const SAVED_MESSAGE: &str = "Settings saved successfully!";

/// Discord rejects messages longer than this.
pub const MESSAGE_LIMIT: u32 = 2000;

/// A join/leave message and where it is posted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageSetting {
    pub enabled: bool,
    pub channel_id: String,
    pub message: String,
}

impl MessageSetting {
    fn with_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Self::default()
        }
    }
}

/// Missing fields in a stored document fall back to [`Default`] field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSettings {
    pub welcome_message: MessageSetting,
    pub leaving_message: MessageSetting,
    pub development_mode_enabled: bool,
    pub test_api_key: String,
    pub bot_token: String,
    pub server_id: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            welcome_message: MessageSetting::with_message(
                "Welcome {user} to {server}! We are glad to have you.",
            ),
            leaving_message: MessageSetting::with_message("Goodbye {user}, we will miss you!"),
            development_mode_enabled: true,
            test_api_key: String::new(),
            bot_token: String::new(),
            server_id: String::new(),
        }
    }
}

impl DashboardSettings {
    /// Merge a stored JSON document over the defaults. Unparseable input
    /// yields the defaults.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::error!("Failed to parse stored settings: {err}");
            Self::default()
        })
    }

    /// Welcome text with the placeholders filled in.
    #[must_use]
    pub fn render_welcome(&self, user: &str, server: &str) -> String {
        render_placeholders(&self.welcome_message.message, user, server)
    }

    #[must_use]
    pub fn render_leaving(&self, user: &str, server: &str) -> String {
        render_placeholders(&self.leaving_message.message, user, server)
    }
}

fn render_placeholders(template: &str, user: &str, server: &str) -> String {
    template.replace("{user}", user).replace("{server}", server)
}

impl Record for DashboardSettings {
    const COLLECTION: &'static str = "dashboard-settings";
    const ID_PREFIX: &'static str = "settings";

    fn record_id(&self) -> Option<&str> {
        Some("current")
    }

    fn assign_id(&mut self, _id: String) {}
}

/// Save `settings` through `port` and mirror the saved copy into `prefs`.
/// A failure at either step settles the banner as `Failed`.
pub async fn persist<P, S>(
    port: &P,
    prefs: &PreferenceStore<S>,
    settings: DashboardSettings,
) -> SaveStatus
where
    P: ConfigPort,
    S: KeyValueStore,
{
    let result = match port.save(settings).await {
        Ok(saved) => prefs
            .save_dashboard_settings(&saved)
            .map_err(|err| format!("Could not write settings: {err}")),
        Err(err) => Err(err.to_string()),
    };
    SaveStatus::settle(&result, |()| SAVED_MESSAGE.to_string(), "Error saving settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryStore, MockBackend, NoDelay};
    use futures::executor::block_on;

    struct FullStore;

    impl KeyValueStore for FullStore {
        type Error = std::io::Error;

        fn get(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            Err(std::io::Error::other("quota exceeded"))
        }

        fn remove(&self, _key: &str) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn persist_mirrors_saved_settings() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let prefs = PreferenceStore::new(MemoryStore::default());
        let mut settings = DashboardSettings::default();
        settings.server_id = "42".into();
        let status = block_on(persist(&backend, &prefs, settings.clone()));
        assert_eq!(status, SaveStatus::Saved(SAVED_MESSAGE.into()));
        assert_eq!(prefs.dashboard_settings().unwrap(), settings);
    }

    #[test]
    fn failed_mirror_write_is_not_reported_as_saved() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let status = block_on(persist(
            &backend,
            &PreferenceStore::new(FullStore),
            DashboardSettings::default(),
        ));
        assert_eq!(
            status,
            SaveStatus::Failed(
                "Error saving settings: Could not write settings: Storage error: quota exceeded"
                    .into()
            )
        );
    }

    #[test]
    fn rejected_port_save_skips_the_mirror() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        backend.fail_next_with("offline");
        let store = MemoryStore::default();
        let status = block_on(persist(
            &backend,
            &PreferenceStore::new(store.clone()),
            DashboardSettings::default(),
        ));
        assert_eq!(
            status,
            SaveStatus::Failed("Error saving settings: Request rejected: offline".into())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn partial_document_merges_over_defaults() {
        let merged = DashboardSettings::from_stored(
            r#"{"botToken":"abc","welcomeMessage":{"enabled":true}}"#,
        );
        assert_eq!(merged.bot_token, "abc");
        assert!(merged.welcome_message.enabled);
        assert_eq!(merged.welcome_message.message, "");
        assert_eq!(merged.leaving_message.message, "Goodbye {user}, we will miss you!");
        assert!(merged.development_mode_enabled);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(
            DashboardSettings::from_stored("{not json"),
            DashboardSettings::default()
        );
    }

    #[test]
    fn placeholders_are_filled() {
        let settings = DashboardSettings::default();
        assert_eq!(
            settings.render_welcome("Ash", "Kanto"),
            "Welcome Ash to Kanto! We are glad to have you."
        );
    }

    #[test]
    fn serializes_with_browser_key_names() {
        let json = serde_json::to_value(DashboardSettings::default()).unwrap();
        assert_eq!(json["developmentModeEnabled"], true);
        assert_eq!(json["welcomeMessage"]["channelId"], "");
    }
}

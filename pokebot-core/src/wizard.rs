//! Save lifecycle shared by the wizard pages.

use crate::catalog::Channel;
use crate::{ConfigPort, Record};
use std::fmt::Display;

/// Banner state of a page's save action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved(String),
    Failed(String),
}

impl SaveStatus {
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        matches!(self, Self::Saving)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Saved(msg) | Self::Failed(msg) => Some(msg),
            Self::Idle | Self::Saving => None,
        }
    }

    /// Collapse a port result into a banner. Failures are reported once and
    /// never retried; the user may press save again.
    pub fn settle<T, E: Display>(
        result: &Result<T, E>,
        success: impl FnOnce(&T) -> String,
        failure_context: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::Saved(success(value)),
            Err(err) => {
                log::error!("{failure_context}: {err}");
                Self::Failed(format!("{failure_context}: {err}"))
            }
        }
    }
}

/// Persist `record` through `port` and produce the matching banner.
///
/// # Errors
///
/// Returns the port error alongside a [`SaveStatus::Failed`] banner.
pub async fn submit<P, R>(
    port: &P,
    record: R,
    success: impl FnOnce(&R) -> String,
) -> (SaveStatus, Result<R, P::Error>)
where
    P: ConfigPort,
    R: Record,
{
    let result = port.save(record).await;
    let status = SaveStatus::settle(&result, success, "Error saving configuration");
    (status, result)
}

/// Delete record `id` through `port`. The banner is `Saved(success)` only
/// once the port confirms, so callers drop the record locally on `Saved`.
pub async fn remove<P, R>(port: &P, id: &str, success: &str) -> SaveStatus
where
    P: ConfigPort,
    R: Record,
{
    let result = port.delete::<R>(id).await;
    SaveStatus::settle(&result, |()| success.to_string(), "Error deleting configuration")
}

/// Channel list as a wizard page sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelLoad {
    #[default]
    Loading,
    Loaded(Vec<Channel>),
    Failed(String),
}

impl ChannelLoad {
    /// Fetch the channel list once, folding a port error into a banner.
    pub async fn fetch<P: ConfigPort>(port: &P) -> Self {
        match port.channels().await {
            Ok(channels) => Self::Loaded(channels),
            Err(err) => {
                log::error!("Could not load channels: {err}");
                Self::Failed(format!("Could not load channels: {err}"))
            }
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        match self {
            Self::Loaded(channels) => channels,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryStore, MockBackend, NoDelay};
    use crate::spawn::SpawnConfig;
    use futures::executor::block_on;

    #[test]
    fn successful_submit_reports_saved_banner() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let mut draft = SpawnConfig::new_draft();
        draft.name = "Weekend".into();
        let (status, result) = block_on(submit(&backend, draft, SpawnConfig::success_message));
        assert!(result.is_ok());
        assert_eq!(
            status,
            SaveStatus::Saved("Configuration \"Weekend\" saved successfully".into())
        );
    }

    #[test]
    fn failed_submit_reports_failed_banner() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        backend.fail_next_with("timeout");
        let (status, result) = block_on(submit(
            &backend,
            SpawnConfig::new_draft(),
            SpawnConfig::success_message,
        ));
        assert!(result.is_err());
        assert_eq!(
            status.message(),
            Some("Error saving configuration: Request rejected: timeout")
        );
        assert!(!status.is_saving());
    }

    #[test]
    fn rejected_delete_keeps_the_record() {
        use crate::ai::{AI_DELETED_MESSAGE, AiConfig};

        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        let mut battler = AiConfig::new_draft();
        battler.ai_name = "Bug Catcher Rick".into();
        let saved = block_on(backend.save(battler)).unwrap();
        let id = saved.id.clone().unwrap();

        backend.fail_next_with("disk full");
        let status = block_on(remove::<_, AiConfig>(&backend, &id, AI_DELETED_MESSAGE));
        assert_eq!(
            status,
            SaveStatus::Failed("Error deleting configuration: Request rejected: disk full".into())
        );
        let listed: Vec<AiConfig> = block_on(backend.list()).unwrap();
        assert_eq!(listed, vec![saved]);

        let status = block_on(remove::<_, AiConfig>(&backend, &id, AI_DELETED_MESSAGE));
        assert_eq!(status, SaveStatus::Saved(AI_DELETED_MESSAGE.into()));
        let listed: Vec<AiConfig> = block_on(backend.list()).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn channel_load_failure_is_reported_and_keeps_spawn_gated() {
        let backend = MockBackend::new(MemoryStore::default(), NoDelay);
        backend.fail_next_with("gateway down");
        let load = block_on(ChannelLoad::fetch(&backend));
        assert_eq!(
            load.error(),
            Some("Could not load channels: Request rejected: gateway down")
        );
        assert!(load.channels().is_empty());

        let mut draft = SpawnConfig::new_draft();
        draft.toggle_channel("channel-1");
        assert!(!draft.is_step_valid(crate::spawn::SpawnStep::Channels, load.is_loaded()));

        let retried = block_on(ChannelLoad::fetch(&backend));
        assert!(retried.is_loaded());
        assert_eq!(retried.channels().len(), 7);
        assert_eq!(retried.error(), None);
    }
}

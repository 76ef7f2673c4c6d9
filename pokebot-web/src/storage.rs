//! Browser adapters for the core storage and timer ports.

use crate::dom;
use async_trait::async_trait;
use pokebot_core::backend::MockBackend;
use pokebot_core::prefs::PreferenceStore;
use pokebot_core::{KeyValueStore, Sleeper};
use std::rc::Rc;
use thiserror::Error;
use yew::prelude::{hook, use_context};

#[derive(Debug, Error)]
#[error("localStorage error: {0}")]
pub struct StorageError(String);

impl StorageError {
    fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        Self(dom::js_error_message(value))
    }
}

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl KeyValueStore for LocalStorageStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        dom::local_storage()
            .and_then(|s| s.get_item(key))
            .map_err(|e| StorageError::from_js(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        dom::local_storage()
            .and_then(|s| s.set_item(key, value))
            .map_err(|e| StorageError::from_js(&e))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        dom::local_storage()
            .and_then(|s| s.remove_item(key))
            .map_err(|e| StorageError::from_js(&e))
    }
}

/// `setTimeout`-backed sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep_ms(&self, duration_ms: u32) {
        if let Err(err) = dom::sleep_ms(duration_ms).await {
            log::warn!("Timer failed: {}", dom::js_error_message(&err));
        }
    }
}

pub type Backend = MockBackend<LocalStorageStore, BrowserSleeper>;

/// Shared backend handle provided through context.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<Backend>);

impl BackendHandle {
    #[must_use]
    pub fn browser() -> Self {
        Self(Rc::new(MockBackend::new(LocalStorageStore, BrowserSleeper)))
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for BackendHandle {
    type Target = Backend;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The backend from context, or a fresh browser backend outside the app shell.
#[hook]
pub fn use_backend() -> BackendHandle {
    use_context::<BackendHandle>().unwrap_or_else(BackendHandle::browser)
}

/// Preference documents in `localStorage`.
#[must_use]
pub const fn preferences() -> PreferenceStore<LocalStorageStore> {
    PreferenceStore::new(LocalStorageStore)
}

//! `localStorage` and `window.alert` adapters.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be disabled (private browsing, sandboxed frames). Reads then
//! behave as if nothing was saved, so the page falls back to the dark theme.

use web_sys::{Storage, Window};

use super::js_message;
use crate::dom::{KeyValueStore, Notifier};
use crate::error::PageError;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(PageError::Storage("localStorage unavailable".into()));
        };
        storage
            .set_item(key, value)
            .map_err(|err| PageError::Storage(js_message(&err)))
    }
}

/// Blocking notice through `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notice(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
}

//! `Browser` backed by the real page through `web-sys`.

use std::sync::Arc;

use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

use crate::bootstrap::{BootError, Browser, StorageEvictor};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub struct WebBrowser {
    window: Window,
}

impl WebBrowser {
    pub fn new() -> Result<Self, BootError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(BootError::NoWindow)
    }

    fn storage(&self) -> Result<Storage, BootError> {
        self.window
            .local_storage()
            .map_err(|err| BootError::Storage(describe(&err)))?
            .ok_or(BootError::StorageUnavailable)
    }
}

impl Browser for WebBrowser {
    fn query_string(&self) -> Result<String, BootError> {
        self.window
            .location()
            .search()
            .map_err(|err| BootError::Location(describe(&err)))
    }

    fn origin(&self) -> Result<String, BootError> {
        self.window
            .location()
            .origin()
            .map_err(|err| BootError::Location(describe(&err)))
    }

    fn load_item(&self, key: &str) -> Result<Option<String>, BootError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| BootError::Storage(describe(&err)))
    }

    fn store_item(&self, key: &str, value: &str) -> Result<(), BootError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| BootError::Storage(describe(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), BootError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| BootError::Storage(describe(&err)))
    }

    fn replace_url(&self, path: &str) -> Result<(), BootError> {
        let title = self
            .window
            .document()
            .map(|document| document.title())
            .unwrap_or_default();
        self.window
            .history()
            .map_err(|err| BootError::History(describe(&err)))?
            .replace_state_with_url(&JsValue::from(js_sys::Object::new()), &title, Some(path))
            .map_err(|err| BootError::History(describe(&err)))
    }

    fn storage_evictor(&self) -> Option<StorageEvictor> {
        // `Window` is not `Send`; look it up again when the eviction runs.
        Some(Arc::new(|key: &str| -> Result<(), BootError> {
            Self::new()?.remove_item(key)
        }))
    }
}

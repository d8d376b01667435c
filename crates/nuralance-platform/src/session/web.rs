//! sessionStorage-backed session store.
//! Tab-scoped: survives reloads within the tab, never shared across tabs.

use nuralance_core::ports::SessionStorePort;
use nuralance_types::{ClientError, Result};
use wasm_bindgen::JsValue;

pub struct WebSessionStore {
    storage: web_sys::Storage,
}

impl WebSessionStore {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Storage("No window object".to_string()))?;

        let storage = window
            .session_storage()
            .map_err(storage_err)?
            .ok_or_else(|| ClientError::Storage("sessionStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl SessionStorePort for WebSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(storage_err)
    }

    fn backend_name(&self) -> &str {
        "sessionStorage"
    }
}

fn storage_err(e: JsValue) -> ClientError {
    ClientError::Storage(format!("{:?}", e))
}

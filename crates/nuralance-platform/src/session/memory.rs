//! In-memory session store.
//! Used as the fallback when sessionStorage is unavailable, and as a
//! substitutable collaborator in tests. Not persistent across reloads.

use nuralance_core::ports::SessionStorePort;
use nuralance_types::Result;
use std::cell::RefCell;
use std::collections::HashMap;

pub struct MemorySessionStore {
    data: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorePort for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::MemorySessionStore;
#[cfg(target_arch = "wasm32")]
pub use web::WebSessionStore;

#[cfg(target_arch = "wasm32")]
use nuralance_core::ports::SessionStorePort;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Open the best available session store.
///
/// sessionStorage keeps the identifier for the tab's lifetime; when it is
/// unavailable (e.g. storage disabled) the memory store is used and the
/// session simply does not survive a reload.
#[cfg(target_arch = "wasm32")]
pub fn open_session_store() -> Rc<dyn SessionStorePort> {
    match WebSessionStore::open() {
        Ok(store) => {
            log::info!("Session store: sessionStorage");
            Rc::new(store)
        }
        Err(e) => {
            log::warn!("sessionStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemorySessionStore::new())
        }
    }
}

//! Browser adapters for the nuralance-core port traits.
//!
//! The HTTP backend and the sessionStorage store only exist on
//! wasm32-unknown-unknown; the in-memory store compiles everywhere and
//! doubles as the fallback when sessionStorage is unavailable.

#[cfg(target_arch = "wasm32")]
pub mod http;
pub mod session;


#[cfg(target_arch = "wasm32")]
pub use http::HttpBackend;
pub use session::MemorySessionStore;
#[cfg(target_arch = "wasm32")]
pub use session::{open_session_store, WebSessionStore};

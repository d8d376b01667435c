//! Session identifier bootstrap.
//!
//! The identifier correlates requests with server-side per-session state.
//! It is created at most once per tab and reused unchanged afterwards. It
//! is not a security token; randomness only has to avoid accidental
//! collisions between tabs.

use crate::ports::SessionStorePort;
use nuralance_types::Result;

/// Tab-scoped storage key holding the session identifier.
pub const SESSION_STORAGE_KEY: &str = "nuralance_session_id";

/// Read the stored session identifier, or synthesize and persist a new one:
/// `session_` + unix millis + 7-char random suffix.
pub fn load_or_create_session_id(store: &dyn SessionStorePort) -> Result<String> {
    if let Some(id) = store.get(SESSION_STORAGE_KEY)? {
        log::info!("Reusing session {} ({})", id, store.backend_name());
        return Ok(id);
    }

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let id = format!(
        "session_{}{}",
        chrono::Utc::now().timestamp_millis(),
        &suffix[..7]
    );
    store.set(SESSION_STORAGE_KEY, &id)?;
    log::info!("Created session {} ({})", id, store.backend_name());
    Ok(id)
}

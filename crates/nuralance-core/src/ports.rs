//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `nuralance-core` (pure Rust).
//! Implementations live in `nuralance-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits,
//! which also makes the two operations testable with mock collaborators.

use async_trait::async_trait;
use nuralance_types::api::{ChatResult, UploadResult};
use nuralance_types::Result;

// ─── Backend Port ────────────────────────────────────────────

/// The HTTP contract of the backend, reduced to its two operations.
#[async_trait(?Send)]
pub trait BackendPort {
    /// `POST /upload-csv` — multipart form with `csv_file` and `session_id`.
    async fn upload_csv(
        &self,
        session_id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<UploadResult>;

    /// `POST /chatbot/message` — JSON `{session_id, message}`.
    async fn send_message(&self, session_id: &str, message: &str) -> Result<ChatResult>;
}

// ─── Session Store Port ──────────────────────────────────────

/// Tab-scoped key/value storage holding the session identifier.
/// sessionStorage is synchronous, so the port is too.
pub trait SessionStorePort {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

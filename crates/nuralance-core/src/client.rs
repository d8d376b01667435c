//! The chat client context — session identifier, backend port, event bus.
//!
//! Constructed once at startup and shared by the two operation handlers.
//! Both operations are async and must be spawned via
//! `wasm_bindgen_futures::spawn_local`; they suspend only their own flow
//! and never block the UI thread. No mutual exclusion is enforced between
//! them: each manages disjoint UI state and is independently reentrant.
//! Failures are emitted as events and also propagated for logging; no
//! retry is ever attempted.

use std::rc::Rc;

use crate::event_bus::EventBus;
use crate::ports::BackendPort;
use nuralance_types::event::ClientEvent;
use nuralance_types::Result;

pub struct ChatClient {
    session_id: String,
    backend: Rc<dyn BackendPort>,
    events: EventBus,
}

impl ChatClient {
    pub fn new(session_id: String, backend: Rc<dyn BackendPort>, events: EventBus) -> Self {
        Self {
            session_id,
            backend,
            events,
        }
    }

    /// The identifier sent with every request, unchanged for the tab's
    /// lifetime.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Submit the selected CSV file for analysis.
    ///
    /// Emits `UploadStarted`, then either `UploadComplete` with the
    /// server's description or `UploadFailed` with the error detail.
    /// The "file must be selected" precondition is enforced by the UI
    /// before this is ever called.
    pub async fn upload_csv(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.events.emit(ClientEvent::UploadStarted);

        match self
            .backend
            .upload_csv(&self.session_id, file_name, bytes)
            .await
        {
            Ok(result) => {
                self.events.emit(ClientEvent::UploadComplete {
                    db_description: result.db_description,
                });
                Ok(())
            }
            Err(e) => {
                self.events.emit(ClientEvent::UploadFailed {
                    detail: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Send one free-text chat message.
    ///
    /// Whitespace-only input is a no-op: no event, no network call.
    /// Emits `ChatStarted`, then `ChatComplete` or `ChatFailed`.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.events.emit(ClientEvent::ChatStarted);

        match self.backend.send_message(&self.session_id, text).await {
            Ok(result) => {
                self.events.emit(ClientEvent::ChatComplete {
                    response: result.response,
                });
                Ok(())
            }
            Err(e) => {
                self.events.emit(ClientEvent::ChatFailed {
                    detail: e.to_string(),
                });
                Err(e)
            }
        }
    }
}

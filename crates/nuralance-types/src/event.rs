use serde::{Deserialize, Serialize};

/// Events emitted by the chat client operations.
/// The UI drains these each frame and updates its state reactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClientEvent {
    /// A CSV upload request has been submitted
    UploadStarted,

    /// Upload succeeded — the server described the analyzed data
    UploadComplete { db_description: String },

    /// Upload failed; `detail` is the server-provided reason or a
    /// transport error message
    UploadFailed { detail: String },

    /// A chat message has been submitted
    ChatStarted,

    /// The server answered a chat message
    ChatComplete { response: String },

    /// Chat request failed
    ChatFailed { detail: String },
}

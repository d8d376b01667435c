//! Wire types for the two backend endpoints.
//!
//! The server is an external collaborator; these structs mirror its JSON
//! bodies exactly. Unknown fields in responses are ignored.

use serde::{Deserialize, Serialize};

/// Success body of `POST /upload-csv`.
/// The server also returns `session_id` and `message` fields; only the
/// description is used by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    pub db_description: String,
}

/// Request body of `POST /chatbot/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Success body of `POST /chatbot/message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResult {
    pub response: String,
}

/// Error body the server sends with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
}

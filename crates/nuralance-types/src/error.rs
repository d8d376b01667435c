use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// Non-2xx response with a structured detail field.
    /// Display is the detail verbatim so it can be surfaced unchanged.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}

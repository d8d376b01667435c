use serde::{Deserialize, Serialize};

/// Who a displayed message is attributed to.
/// Assistant text is trusted and rendered as markdown; user text never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation display.
/// Ephemeral — messages are never persisted or sent back to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Fixed greeting shown before any upload has happened.
pub const WELCOME_MESSAGE: &str =
    "**Welcome to Nuralance!**\n\nPlease upload your finance data as a CSV file to begin.";

/// Compose the post-upload welcome message embedding the server's
/// description of the analyzed data.
pub fn analysis_welcome(db_description: &str) -> String {
    format!(
        "**Analysis Complete!**\n\nI've processed your file. Here's what I understand about your data:\n\n{}\n\nHow can I help you analyze this information?",
        db_description
    )
}

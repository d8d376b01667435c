//! UI-level state that drives rendering.
//! Updated each frame by draining the client's EventBus; the panels only
//! read and mutate this projection, never the network layer.

use crate::markdown::{self, Line};
use nuralance_types::event::ClientEvent;
use nuralance_types::message::{analysis_welcome, Message, WELCOME_MESSAGE};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_UPLOADING: &str =
    "Uploading and analyzing your data... This may take a moment.";
pub const STATUS_THINKING: &str = "Nuralance is thinking...";
pub const STATUS_ERROR: &str = "Error";
pub const STATUS_CHOOSE_FILE: &str = "Please select a CSV file first.";

/// Which input surface is shown below the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Upload controls; no chat input yet
    Upload,
    /// Message input; upload controls hidden
    Chat,
}

/// A conversation entry plus its pre-rendered markdown.
/// `rendered` is empty for user messages, which are displayed literally.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub message: Message,
    pub rendered: Vec<Line>,
}

impl ChatEntry {
    fn user(text: &str) -> Self {
        Self {
            message: Message::user(text),
            rendered: Vec::new(),
        }
    }

    fn assistant(text: String) -> Self {
        let rendered = markdown::render_markdown(&text);
        Self {
            message: Message::assistant(text),
            rendered,
        }
    }
}

/// A file chosen via the picker, held until the user uploads it.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// State visible to UI panels
pub struct UiState {
    pub mode: ViewMode,
    /// Displayed messages (user + assistant)
    pub messages: Vec<ChatEntry>,
    /// Status line text
    pub status_text: String,
    /// Input field content
    pub input_text: String,
    /// File selected in the upload panel, kept across failed uploads
    pub selected_file: Option<PickedFile>,
    /// One-shot request to focus the message input
    pub focus_input: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Upload,
            messages: vec![ChatEntry::assistant(WELCOME_MESSAGE.to_string())],
            status_text: STATUS_READY.to_string(),
            input_text: String::new(),
            selected_file: None,
            focus_input: false,
        }
    }

    /// Process client events and update UI state
    pub fn process_events(&mut self, events: Vec<ClientEvent>) {
        for event in events {
            match event {
                ClientEvent::UploadStarted => {
                    self.status_text = STATUS_UPLOADING.to_string();
                }
                ClientEvent::UploadComplete { db_description } => {
                    self.push_assistant_message(analysis_welcome(&db_description));
                    self.status_text = STATUS_READY.to_string();
                    self.mode = ViewMode::Chat;
                    self.focus_input = true;
                }
                ClientEvent::UploadFailed { detail } => {
                    // Stay in upload mode; the user retries manually.
                    self.status_text = format!("Error: {}", detail);
                }
                ClientEvent::ChatStarted => {
                    self.status_text = STATUS_THINKING.to_string();
                }
                ClientEvent::ChatComplete { response } => {
                    self.push_assistant_message(response);
                    self.status_text = STATUS_READY.to_string();
                }
                ClientEvent::ChatFailed { detail } => {
                    self.push_assistant_message(format!("Error: {}", detail));
                    self.status_text = STATUS_ERROR.to_string();
                }
            }
        }
    }

    /// Upload precondition: returns the file to submit, or refuses
    /// locally by setting the status text. The selection is kept so a
    /// failed upload can be retried.
    pub fn request_upload(&mut self) -> Option<PickedFile> {
        match self.selected_file.clone() {
            Some(file) => Some(file),
            None => {
                self.status_text = STATUS_CHOOSE_FILE.to_string();
                None
            }
        }
    }

    /// Add a user message to the display. Stored and shown literally.
    pub fn push_user_message(&mut self, text: &str) {
        self.messages.push(ChatEntry::user(text));
    }

    /// Add an assistant message, rendering its markdown once.
    pub fn push_assistant_message(&mut self, text: String) {
        self.messages.push(ChatEntry::assistant(text));
    }

    /// Whether a request is in flight (status shows an in-progress text).
    pub fn is_working(&self) -> bool {
        self.status_text == STATUS_UPLOADING || self.status_text == STATUS_THINKING
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

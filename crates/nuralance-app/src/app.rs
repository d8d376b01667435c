//! Main egui application — composes the panels and owns the chat client.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel};

use nuralance_core::event_bus::EventBus;
use nuralance_core::session::load_or_create_session_id;
use nuralance_core::ChatClient;
use nuralance_platform::{open_session_store, HttpBackend, MemorySessionStore};
use nuralance_types::config::ClientConfig;
use nuralance_ui::panels::{chat, upload};
use nuralance_ui::state::{PickedFile, UiState};
use nuralance_ui::theme;

/// The main application state
pub struct NuralanceApp {
    ui_state: UiState,
    client: Rc<ChatClient>,
    /// Slot filled by the async file dialog, polled each frame.
    picked_file: Rc<RefCell<Option<PickedFile>>>,
    first_frame: bool,
}

impl NuralanceApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = open_session_store();
        let session_id = match load_or_create_session_id(store.as_ref()) {
            Ok(id) => id,
            Err(e) => {
                // The memory store cannot fail; the session just won't
                // survive a reload.
                log::warn!("Session store failed ({}), using in-memory session", e);
                load_or_create_session_id(&MemorySessionStore::new()).unwrap_or_default()
            }
        };

        let backend = Rc::new(HttpBackend::new(ClientConfig::default()));
        let client = Rc::new(ChatClient::new(session_id, backend, EventBus::new()));

        Self {
            ui_state: UiState::new(),
            client,
            picked_file: Rc::new(RefCell::new(None)),
            first_frame: true,
        }
    }
}

impl eframe::App for NuralanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Pull in a file chosen by the async dialog, if any.
        if let Some(file) = self.picked_file.borrow_mut().take() {
            self.ui_state.selected_file = Some(file);
        }

        // Drain events from in-flight operations
        let events = self.client.events().drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_working() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            if let Some(user_msg) = chat::chat_panel(ui, &mut self.ui_state) {
                self.dispatch_message(user_msg, ctx);
            }

            if self.ui_state.mode == nuralance_ui::state::ViewMode::Upload {
                ui.add_space(8.0);
                match upload::upload_panel(ui, &mut self.ui_state) {
                    Some(upload::UploadAction::PickFile) => self.dispatch_pick_file(ctx),
                    Some(upload::UploadAction::Upload(file)) => self.dispatch_upload(file, ctx),
                    None => {}
                }
            }
        });
    }
}

impl NuralanceApp {
    /// Open the browser file dialog (async) and stash the chosen file.
    fn dispatch_pick_file(&self, ctx: &egui::Context) {
        let slot = self.picked_file.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let handle = rfd::AsyncFileDialog::new()
                .add_filter("CSV", &["csv"])
                .pick_file()
                .await;
            if let Some(file) = handle {
                let name = file.file_name();
                let bytes = file.read().await;
                log::info!("Selected file {} ({} bytes)", name, bytes.len());
                *slot.borrow_mut() = Some(PickedFile { name, bytes });
            }
            ctx.request_repaint();
        });
    }

    /// Submit the chosen file to the backend (async)
    fn dispatch_upload(&self, file: PickedFile, ctx: &egui::Context) {
        let client = self.client.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = client.upload_csv(&file.name, &file.bytes).await {
                log::error!("Upload error: {}", e);
            }
            ctx.request_repaint();
        });
    }

    /// Send a chat message to the backend (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let client = self.client.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = client.send_message(&text).await {
                log::error!("Chat error: {}", e);
            }
            ctx.request_repaint();
        });
    }
}

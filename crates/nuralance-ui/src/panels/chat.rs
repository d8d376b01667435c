//! Chat panel — the conversation display and, in chat mode, the message
//! input. The display is always visible so the initial welcome message
//! shows before any upload.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use crate::markdown;
use crate::state::{UiState, ViewMode};
use crate::theme::*;
use nuralance_types::message::Role;

/// Render the chat panel. Returns Some(message) when the user submits
/// input with the Send button or the Enter key.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Nuralance").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_working() {
                            WARNING
                        } else if state.status_text.starts_with("Error") {
                            ERROR
                        } else {
                            SUCCESS
                        };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let input_height = if state.mode == ViewMode::Chat { 60.0 } else { 8.0 };
                let available_height = ui.available_height() - input_height;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.messages {
                            render_message(ui, entry);
                            ui.add_space(4.0);
                        }
                    });

                if state.mode == ViewMode::Chat {
                    ui.add_space(8.0);
                    submitted = message_input(ui, state);
                }
            });
        });

    submitted
}

fn message_input(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Ask about your data...")
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add(input);

        if state.focus_input {
            response.request_focus();
            state.focus_input = false;
        }

        let send_enabled = !state.input_text.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        // Submit on Enter or button click; whitespace-only input is a no-op.
        if (response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && send_enabled)
            || send_btn.clicked()
        {
            let text = state.input_text.trim().to_string();
            state.push_user_message(&text);
            submitted = Some(text);
            state.input_text.clear();
            response.request_focus();
        }
    });

    submitted
}

fn render_message(ui: &mut egui::Ui, entry: &crate::state::ChatEntry) {
    let (label, label_color) = match entry.message.role {
        Role::User => ("You", ACCENT),
        Role::Assistant => ("Nuralance", SUCCESS),
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            match entry.message.role {
                // Trust boundary: user text is a literal label, never markdown.
                Role::User => {
                    ui.label(RichText::new(&entry.message.text).color(TEXT_PRIMARY));
                }
                Role::Assistant => {
                    markdown::markdown_ui(ui, &entry.rendered);
                }
            }
        });
}

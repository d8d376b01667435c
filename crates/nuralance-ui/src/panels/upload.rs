//! Upload panel — file picker and upload controls, shown until the first
//! successful upload switches the UI into chat mode.

use egui::{self, RichText, Vec2};

use crate::state::{PickedFile, UiState};
use crate::theme::*;

/// What the composition root should do after rendering the upload panel.
pub enum UploadAction {
    /// Open the file dialog
    PickFile,
    /// Submit the chosen file to the backend
    Upload(PickedFile),
}

/// Render the upload controls. Returns an action for the caller to handle.
pub fn upload_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<UploadAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("Upload your finance data as a CSV file to begin.")
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    let pick_btn = ui.add(
                        egui::Button::new(RichText::new("Choose CSV...").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(100.0, 0.0)),
                    );
                    if pick_btn.clicked() {
                        action = Some(UploadAction::PickFile);
                    }

                    match &state.selected_file {
                        Some(file) => {
                            ui.label(RichText::new(&file.name).color(TEXT_PRIMARY));
                        }
                        None => {
                            ui.label(
                                RichText::new("No file selected")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                    }

                    let upload_btn = ui.add(
                        egui::Button::new(
                            RichText::new("Upload & Analyze").color(TEXT_PRIMARY).strong(),
                        )
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(130.0, 0.0)),
                    );
                    if upload_btn.clicked() {
                        if let Some(file) = state.request_upload() {
                            action = Some(UploadAction::Upload(file));
                        }
                    }
                });
            });
        });

    action
}

// CyrLat - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels, drains the file-dialog request flags, applies
// font changes, and owns every piece of file I/O triggered from the UI.

use crate::app::state::{AppState, MessageBody, StatusKey, UserMessage};
use crate::ui;
use crate::util::constants::{MAX_INPUT_FILE_SIZE, TEXT_PANE_SIZE_OFFSET};
use crate::util::error::CyrLatError;
use std::io;
use std::path::Path;

/// The CyrLat application.
pub struct CyrLatApp {
    pub state: AppState,
}

impl CyrLatApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Raise the load-input file dialog and read the chosen file.
    fn load_input_via_dialog(&mut self) {
        let tr = ui::i18n::strings(self.state.locale);
        let Some(path) = rfd::FileDialog::new()
            .set_title(tr.dlg_load_title)
            .add_filter(tr.file_filter_text, &["txt"])
            .add_filter(tr.file_filter_all, &["*"])
            .pick_file()
        else {
            return;
        };

        match read_text_file(&path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), bytes = content.len(), "Input file loaded");
                self.state.input_text = content;
                self.state.status = StatusKey::FileLoaded;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load input file");
                self.state.message = Some(UserMessage::error(MessageBody::FileReadFailed(
                    e.to_string(),
                )));
            }
        }
    }

    /// Raise the save-output file dialog and write the output pane.
    fn save_output_via_dialog(&mut self) {
        let tr = ui::i18n::strings(self.state.locale);
        let output = self.state.output_text.trim_end_matches('\n').to_string();
        if output.is_empty() {
            self.state.message = Some(UserMessage::info(MessageBody::PromptEmptyOutput));
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title(tr.dlg_save_title)
            .add_filter(tr.file_filter_text, &["txt"])
            .set_file_name("output.txt")
            .save_file()
        else {
            return;
        };

        match write_text_file(&path, &output) {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = output.len(), "Output file saved");
                self.state.status = StatusKey::FileSaved;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to save output file");
                self.state.message = Some(UserMessage::error(MessageBody::FileSaveFailed(
                    e.to_string(),
                )));
            }
        }
    }
}

impl eframe::App for CyrLatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Re-apply text styles when the font settings changed.
        if self.state.font_dirty {
            apply_text_styles(ctx, &self.state);
            self.state.font_dirty = false;
        }

        // ---- Handle flags set by the editor panel ----
        if self.state.request_load_input {
            self.state.request_load_input = false;
            self.load_input_via_dialog();
        }
        if self.state.request_save_output {
            self.state.request_save_output = false;
            self.save_output_via_dialog();
        }

        let tr = ui::i18n::strings(self.state.locale);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(tr.menu_file, |ui| {
                    if ui.button(tr.menu_load_input).clicked() {
                        self.state.request_load_input = true;
                        ui.close_menu();
                    }
                    if ui.button(tr.menu_save_output).clicked() {
                        self.state.request_save_output = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(tr.menu_exit).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button(tr.menu_edit, |ui| {
                    if ui.button(tr.menu_options).clicked() {
                        self.state.show_options = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button(tr.menu_help, |ui| {
                    if ui.button(tr.menu_about).clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status_text = tr.status(self.state.status);
                if self.state.status == StatusKey::Failed {
                    ui.colored_label(ui::theme::STATUS_FAILED, status_text);
                } else {
                    ui.label(status_text);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(tr.credit).small().weak());
                });
            });
        });

        // Conversion controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui::panels::controls::render(ui, &mut self.state);
        });

        // Central panel: the two text panes
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::editor::render(ui, &mut self.state);
        });

        // Dialogs (modal-ish)
        ui::panels::options::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::dialogs::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}

/// Apply the selected font family and size uniformly to all text styles,
/// mirroring the original's one-font-everywhere behaviour. Headings render
/// one step larger, small text one step smaller.
fn apply_text_styles(ctx: &egui::Context, state: &AppState) {
    use egui::{FontId, TextStyle};

    let family = ui::theme::font_family(state.font_choice);
    let size = state.font_size;

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (
            TextStyle::Heading,
            FontId::new(size + TEXT_PANE_SIZE_OFFSET + 1.0, family.clone()),
        ),
        (TextStyle::Body, FontId::new(size, family.clone())),
        (
            TextStyle::Monospace,
            FontId::new(size, egui::FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(size, family.clone())),
        (TextStyle::Small, FontId::new((size - 2.0).max(8.0), family)),
    ]
    .into();
    ctx.set_style(style);
}

/// Read a UTF-8 text file for the input pane, bounded by the size limit.
pub fn read_text_file(path: &Path) -> Result<String, CyrLatError> {
    let meta = std::fs::metadata(path).map_err(|e| CyrLatError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    if meta.len() > MAX_INPUT_FILE_SIZE {
        return Err(CyrLatError::Io {
            path: path.to_path_buf(),
            operation: "read",
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "file is {} bytes, exceeds maximum of {} bytes",
                    meta.len(),
                    MAX_INPUT_FILE_SIZE
                ),
            ),
        });
    }
    std::fs::read_to_string(path).map_err(|e| CyrLatError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })
}

/// Write the output pane to a UTF-8 text file.
pub fn write_text_file(path: &Path, content: &str) -> Result<(), CyrLatError> {
    std::fs::write(path, content).map_err(|e| CyrLatError::Io {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

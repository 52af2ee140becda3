// CyrLat - ui/panels/editor.rs
//
// The two text panes with their per-pane file buttons, plus the action row
// (Output -> Input, Clear). File dialogs themselves are raised by the
// eframe::App from the request flags; this layer only renders and mutates
// state.

use crate::app::state::AppState;
use crate::ui::{i18n, theme};
use crate::util::constants::TEXT_PANE_SIZE_OFFSET;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let tr = i18n::strings(state.locale);
    let pane_font = egui::FontId::new(
        state.font_size + TEXT_PANE_SIZE_OFFSET,
        theme::font_family(state.font_choice),
    );

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        // Action row pinned to the bottom edge.
        ui.add_space(theme::CONTROLS_SPACING / 2.0);
        ui.horizontal(|ui| {
            if ui.button(tr.btn_output_to_input).clicked() {
                state.copy_output_to_input();
            }
            if ui.button(tr.btn_clear).clicked() {
                state.clear_texts();
            }
        });
        ui.add_space(theme::CONTROLS_SPACING / 2.0);

        // The panes take whatever height remains above the action row.
        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.columns(2, |columns| {
                render_pane(
                    &mut columns[0],
                    PaneKind::Input,
                    state,
                    &pane_font,
                );
                render_pane(
                    &mut columns[1],
                    PaneKind::Output,
                    state,
                    &pane_font,
                );
            });
        });
    });
}

#[derive(Clone, Copy)]
enum PaneKind {
    Input,
    Output,
}

fn render_pane(ui: &mut egui::Ui, kind: PaneKind, state: &mut AppState, font: &egui::FontId) {
    let tr = i18n::strings(state.locale);
    let (label, button, salt) = match kind {
        PaneKind::Input => (tr.input_label, tr.btn_load_file, "input_pane"),
        PaneKind::Output => (tr.output_label, tr.btn_save_file, "output_pane"),
    };

    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button(button).clicked() {
                match kind {
                    PaneKind::Input => state.request_load_input = true,
                    PaneKind::Output => state.request_save_output = true,
                }
            }
        });
    });

    egui::ScrollArea::vertical()
        .id_salt(salt)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let text = match kind {
                PaneKind::Input => &mut state.input_text,
                PaneKind::Output => &mut state.output_text,
            };
            ui.add(
                egui::TextEdit::multiline(text)
                    .font(font.clone())
                    .desired_width(f32::INFINITY)
                    .desired_rows(24),
            );
        });
}

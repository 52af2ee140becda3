// CyrLat - ui/panels/dialogs.rs
//
// The modal info/error message dialog, counterpart of the original's
// blocking message boxes. At most one message is pending at a time; the
// dialog is dismissed with OK or the window close button.

use crate::app::state::{AppState, MessageKind};
use crate::ui::{i18n, theme};

/// Render the pending message dialog (if `state.message` is set).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.message.clone() else {
        return;
    };

    let tr = i18n::strings(state.locale);
    let title = tr.message_title(message.kind);
    let text = tr.message_text(&message.body);

    let mut open = true;
    let mut dismissed = false;
    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(theme::MESSAGE_DIALOG_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            match message.kind {
                MessageKind::Error => {
                    ui.colored_label(theme::STATUS_FAILED, text);
                }
                MessageKind::Info => {
                    ui.label(text);
                }
            }
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(tr.btn_ok).clicked() {
                    dismissed = true;
                }
            });
            ui.add_space(4.0);
        });

    if !open || dismissed {
        state.message = None;
    }
}

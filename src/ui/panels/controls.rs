// CyrLat - ui/panels/controls.rs
//
// Conversion controls: direction radios, the ASCII-mode checkbox, and the
// Transliterate/Swap buttons. The checkbox is interactive only while the
// direction is RU -> LAT; AppState::set_direction keeps the flag itself
// consistent.

use crate::app::state::AppState;
use crate::core::model::Direction;
use crate::ui::{i18n, theme};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let tr = i18n::strings(state.locale);

    ui.add_space(theme::CONTROLS_SPACING / 2.0);
    ui.strong(tr.heading);
    ui.add_space(theme::CONTROLS_SPACING / 2.0);

    ui.horizontal_wrapped(|ui| {
        ui.label(tr.direction_label);

        let mut direction = state.direction;
        let changed = ui
            .radio_value(&mut direction, Direction::Auto, tr.dir_auto)
            .changed()
            | ui.radio_value(&mut direction, Direction::RuToLat, tr.dir_ru2lat)
                .changed()
            | ui.radio_value(&mut direction, Direction::LatToRu, tr.dir_lat2ru)
                .changed();
        if changed {
            state.set_direction(direction);
        }

        ui.separator();

        ui.add_enabled(
            state.ascii_toggle_enabled(),
            egui::Checkbox::new(&mut state.ascii_only, tr.ascii_checkbox),
        );

        ui.separator();

        if ui.button(tr.btn_transliterate).clicked() {
            state.transliterate();
        }
        if ui.button(tr.btn_swap).clicked() {
            state.swap_texts();
        }
    });
    ui.add_space(theme::CONTROLS_SPACING / 2.0);
}

// CyrLat - ui/panels/options.rs
//
// Options dialog: appearance settings (font family, font size, language).
// Shown when the user opens Edit > Options... from the menu bar.
//
// All changes take effect immediately; the size is clamped on every change
// through AppState::set_font_size.

use crate::app::state::AppState;
use crate::core::model::{FontChoice, Locale};
use crate::ui::{i18n, theme};
use crate::util::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Render the Options dialog (if `state.show_options` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_options {
        return;
    }

    let tr = i18n::strings(state.locale);
    let mut open = true;
    egui::Window::new(tr.options_group)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(theme::DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading(tr.appearance_heading);
            ui.add_space(4.0);

            // Font family.
            ui.horizontal(|ui| {
                ui.label(tr.font_label);
                let mut choice = state.font_choice;
                egui::ComboBox::from_id_salt("font_family")
                    .selected_text(choice.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut choice,
                            FontChoice::Proportional,
                            FontChoice::Proportional.label(),
                        );
                        ui.selectable_value(
                            &mut choice,
                            FontChoice::Monospace,
                            FontChoice::Monospace.label(),
                        );
                    });
                if choice != state.font_choice {
                    state.set_font_choice(choice);
                }
            });
            ui.add_space(4.0);

            // Font size.
            ui.horizontal(|ui| {
                ui.label(tr.size_label);
                let mut v = state.font_size;
                if ui
                    .add(
                        egui::Slider::new(&mut v, MIN_FONT_SIZE..=MAX_FONT_SIZE)
                            .step_by(1.0)
                            .suffix(" pt"),
                    )
                    .changed()
                {
                    state.set_font_size(v);
                }
                if (state.font_size - DEFAULT_FONT_SIZE).abs() > 0.1
                    && ui.small_button(tr.btn_reset).clicked()
                {
                    state.set_font_size(DEFAULT_FONT_SIZE);
                }
            });
            ui.add_space(4.0);
            ui.label(egui::RichText::new(tr.font_hint).small().weak());

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            // Language.
            ui.horizontal(|ui| {
                ui.label(tr.language_label);
                let mut locale = state.locale;
                egui::ComboBox::from_id_salt("ui_locale")
                    .selected_text(locale_name(locale))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut locale, Locale::En, locale_name(Locale::En));
                        ui.selectable_value(&mut locale, Locale::De, locale_name(Locale::De));
                    });
                if locale != state.locale {
                    state.locale = locale;
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(tr.btn_close).clicked() {
                    state.show_options = false;
                }
            });
        });

    if !open {
        state.show_options = false;
    }
}

/// Display name of a locale, in that locale.
fn locale_name(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "English",
        Locale::De => "Deutsch",
    }
}

// CyrLat - ui/theme.rs
//
// Layout constants, status colours, and the font-choice mapping.
// No dependencies on app state or business logic.

use crate::core::model::FontChoice;
use egui::Color32;

/// Text colour for the "Failed" status.
pub const STATUS_FAILED: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Layout constants.
pub const CONTROLS_SPACING: f32 = 8.0;
pub const PANE_GAP: f32 = 12.0;
pub const DIALOG_WIDTH: f32 = 420.0;
pub const MESSAGE_DIALOG_MIN_WIDTH: f32 = 320.0;

/// The egui font family a [`FontChoice`] renders with.
pub fn font_family(choice: FontChoice) -> egui::FontFamily {
    match choice {
        FontChoice::Proportional => egui::FontFamily::Proportional,
        FontChoice::Monospace => egui::FontFamily::Monospace,
    }
}

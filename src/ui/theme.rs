// LogWindow - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Background behind the current search match.
pub const MATCH_BG: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Text colour of the current search match.
pub const MATCH_TEXT: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900

/// Status bar colours.
pub const STATUS_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const TOOLBAR_MARGIN: f32 = 10.0;
pub const SEARCH_ENTRY_WIDTH: f32 = 240.0;
pub const FOLDER_BUTTON_SIZE: f32 = 32.0;

/// Switch between the dark and light egui visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

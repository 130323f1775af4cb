// LogWindow - ui/panels/toolbar.rs
//
// Bottom action row: search entry on the left, Clear / Save / Open-folder
// buttons on the right. Produces commands; never mutates the window itself.

use crate::app::log_window::{LogWindow, WindowCommand};
use crate::ui::theme;
use crate::util::constants;

/// Symbol shown on the open-folder button.
const FOLDER_ICON: &str = "\u{1f5c1}";

/// Render the toolbar and return the commands the user issued this frame.
pub fn render(ui: &mut egui::Ui, window: &mut LogWindow) -> Vec<WindowCommand> {
    let mut commands = Vec::new();

    ui.horizontal(|ui| {
        ui.add_space(theme::TOOLBAR_MARGIN);

        let mut query = window.search_text().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .id_salt("search_entry")
                .hint_text(constants::SEARCH_PLACEHOLDER)
                .desired_width(theme::SEARCH_ENTRY_WIDTH),
        );
        if window.take_search_focus_request() {
            response.request_focus();
        }
        if response.gained_focus() && !window.is_search_attached() {
            commands.push(WindowCommand::AttachSearch);
        }
        if response.changed() {
            commands.push(WindowCommand::SearchChanged(query));
        }

        let view = window.view();
        if view.is_searching() {
            if view.current_match().is_some() {
                ui.label(format!("{} matches", view.match_count()));
            } else {
                ui.label(egui::RichText::new("No matches").weak());
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(theme::TOOLBAR_MARGIN);
            if ui
                .button("Clear Log")
                .on_hover_text("Clears log-window")
                .clicked()
            {
                commands.push(WindowCommand::ClearLog);
            }
            if ui
                .button("Save Log")
                .on_hover_text("Saves Log-Window")
                .clicked()
            {
                commands.push(WindowCommand::SaveLog);
            }
            ui.add_space(theme::TOOLBAR_MARGIN);
            let folder = egui::Button::new(FOLDER_ICON).min_size(egui::vec2(
                theme::FOLDER_BUTTON_SIZE,
                theme::FOLDER_BUTTON_SIZE,
            ));
            if ui
                .add(folder)
                .on_hover_text("Open Logs-Folder")
                .clicked()
            {
                commands.push(WindowCommand::OpenLogFolder);
            }
        });
    });

    commands
}

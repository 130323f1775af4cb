// LogWindow - gui.rs
//
// Top-level eframe::App implementation.
// Collects shortcuts, draws the panels, and dispatches the resulting
// commands to the window controller. Errors from save / open-folder are
// reported in the status bar; the window itself never shows a dialog.

use crate::app::log_window::{LogWindow, Outcome, WindowCommand};
use crate::ui;
use crate::util::constants;

/// The LogWindow application.
pub struct LogWindowApp {
    pub window: LogWindow,
    pub font_size: f32,
    pub status_message: String,
}

impl LogWindowApp {
    /// Create a new application instance around an existing window.
    pub fn new(window: LogWindow, font_size: f32) -> Self {
        Self {
            window,
            font_size,
            status_message: "Ready. Press Ctrl+F to search.".to_string(),
        }
    }

    fn dispatch(&mut self, commands: Vec<WindowCommand>) {
        for command in commands {
            match self.window.handle(command) {
                Ok(Outcome::None) => {}
                Ok(Outcome::Saved(path)) => {
                    self.status_message = format!("Saved log to {}", path.display());
                }
                Ok(Outcome::FolderOpened(dir)) => {
                    self.status_message = format!("Opened {}", dir.display());
                }
                Err(e) => {
                    tracing::error!(error = %e, "Log window action failed");
                    self.status_message = e.to_string();
                }
            }
        }
    }
}

impl eframe::App for LogWindowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.view_mut().sync();

        // Shortcuts first so the search entry never receives Escape / Enter.
        let shortcuts = ui::shortcuts::collect(ctx, self.window.is_search_attached());
        self.dispatch(shortcuts);

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::default().fill(ui::theme::STATUS_BG).inner_margin(4.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message).color(ui::theme::STATUS_TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let bytes = self.window.buffer().len();
                        ui.label(
                            egui::RichText::new(format!("{bytes} bytes"))
                                .color(ui::theme::STATUS_TEXT),
                        );
                    });
                });
            });

        let mut clicked = Vec::new();
        egui::TopBottomPanel::bottom("toolbar")
            .frame(egui::Frame::default().inner_margin(ui::theme::TOOLBAR_MARGIN))
            .show(ctx, |ui| {
                clicked = ui::panels::toolbar::render(ui, &mut self.window);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, self.window.view_mut(), self.font_size);
        });

        if !clicked.is_empty() {
            self.dispatch(clicked);
            ctx.request_repaint();
        }

        // Text appended by other threads has no input event to wake the loop.
        ctx.request_repaint_after(std::time::Duration::from_millis(
            constants::BUFFER_REFRESH_INTERVAL_MS,
        ));
    }
}

// LogWindow - ui/panels/log_view.rs
//
// Virtual-scrolling monospace rendering of the buffer with the current search
// match highlighted and scrolled into view.
//
// Uses `ScrollArea::show_rows`, so only the lines inside the viewport are
// fetched from the buffer and laid out each frame.

use crate::app::text_view::LogTextView;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId};
use std::ops::Range;

/// One line of the buffer: its text without the trailing newline, and the
/// byte offset where it starts.
#[derive(Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub start: usize,
    pub text: &'a str,
}

/// Portion of `range` that lies inside `line`, relative to the line start.
pub fn highlight_in_line(line: &Line<'_>, range: &Range<usize>) -> Option<Range<usize>> {
    let line_end = line.start + line.text.len();
    if range.start >= line_end || range.end <= line.start {
        return None;
    }
    let from = range.start.max(line.start) - line.start;
    let to = range.end.min(line_end) - line.start;
    (line.text.is_char_boundary(from) && line.text.is_char_boundary(to)).then_some(from..to)
}

fn line_job(text: &str, highlight: Option<Range<usize>>, font: &FontId, colour: Color32) -> LayoutJob {
    let plain = TextFormat {
        font_id: font.clone(),
        color: colour,
        ..Default::default()
    };
    let mut job = LayoutJob::default();
    match highlight {
        Some(h) => {
            job.append(&text[..h.start], 0.0, plain.clone());
            job.append(
                &text[h.clone()],
                0.0,
                TextFormat {
                    font_id: font.clone(),
                    color: theme::MATCH_TEXT,
                    background: theme::MATCH_BG,
                    ..Default::default()
                },
            );
            job.append(&text[h.end..], 0.0, plain);
        }
        None => job.append(text, 0.0, plain),
    }
    job
}

/// Render the log view into the central panel.
pub fn render(ui: &mut egui::Ui, view: &mut LogTextView, font_size: f32) {
    // Detaching search hands keyboard focus back to the view.
    if view.take_focus_request() {
        ui.memory_mut(|mem| {
            if let Some(id) = mem.focused() {
                mem.surrender_focus(id);
            }
        });
    }

    let line_count = view.line_count();
    if line_count == 0 {
        ui.label(egui::RichText::new("Log is empty.").weak());
        return;
    }

    let current = view.current_match();
    let font = FontId::monospace(font_size);
    let colour = ui.visuals().text_color();
    let row_height = ui.fonts(|fonts| fonts.row_height(&font));
    ui.spacing_mut().item_spacing.y = 0.0;

    let mut scroll_area = egui::ScrollArea::both()
        .id_salt("log_view")
        .auto_shrink([false; 2])
        .stick_to_bottom(current.is_none());
    if view.take_scroll_request() {
        if let Some(range) = &current {
            let row = view.line_of(range.start);
            let offset = row as f32 * row_height - ui.available_height() / 2.0;
            scroll_area = scroll_area.vertical_scroll_offset(offset.max(0.0));
        }
    }

    scroll_area.show_rows(ui, row_height, line_count, |ui, row_range| {
        for index in row_range {
            let (Some(range), Some(text)) = (view.line_range(index), view.line_text(index)) else {
                continue;
            };
            let line = Line {
                start: range.start,
                text: &text,
            };
            let highlight = current
                .as_ref()
                .and_then(|m| highlight_in_line(&line, m));
            ui.add(egui::Label::new(line_job(line.text, highlight, &font, colour)).extend());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::LogBuffer;

    #[test]
    fn test_highlight_is_relative_to_line() {
        let first = Line {
            start: 0,
            text: "first line",
        };
        let second = Line {
            start: 11,
            text: "alpha beta alpha",
        };
        assert_eq!(highlight_in_line(&first, &(22..27)), None);
        assert_eq!(highlight_in_line(&second, &(22..27)), Some(11..16));
    }

    #[test]
    fn test_highlight_outside_every_line_is_ignored() {
        let line = Line {
            start: 0,
            text: "short",
        };
        assert_eq!(highlight_in_line(&line, &(10..12)), None);
    }

    #[test]
    fn test_highlight_is_clipped_to_line_end() {
        let line = Line {
            start: 4,
            text: "abc",
        };
        assert_eq!(highlight_in_line(&line, &(5..20)), Some(1..3));
    }

    #[test]
    fn test_render_lays_out_only_visible_rows() {
        let text: String = (0..50_000).map(|i| format!("line {i}\n")).collect();
        let mut view = LogTextView::new(LogBuffer::from_text(text));
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(640.0, 480.0),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| render(ui, &mut view, 13.0));
        });
        let shapes = output.shapes.len();
        assert!(shapes < 1_000, "laid out {shapes} shapes");
    }
}

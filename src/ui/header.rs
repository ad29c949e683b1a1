//! Status header
//!
//! Shows the pending error, the prompt, or the chosen file, followed by the
//! chosen output format once there is one.

use crate::app::Selection;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct HeaderRenderer;

impl HeaderRenderer {
    /// Rows needed for the header of `selection`
    pub fn height(selection: &Selection) -> u16 {
        if selection.output_format.is_some() { 2 } else { 1 }
    }

    /// Header lines for `selection`, indented by two columns
    pub fn lines(selection: &Selection) -> Vec<Line<'static>> {
        let status = match (&selection.last_error, &selection.selected_file) {
            (Some(error), _) => Line::from(vec![
                Span::raw("  "),
                Span::styled(error.clone(), Styles::error()),
            ]),
            (None, None) => Line::from(vec![
                Span::raw("  "),
                Span::styled("Pick a file:", Styles::text()),
            ]),
            (None, Some(file)) => Line::from(vec![
                Span::raw("  Selected file: "),
                Span::styled(file.display().to_string(), Styles::chosen()),
            ]),
        };

        let mut lines = vec![status];
        if let Some(ref format) = selection.output_format {
            lines.push(Line::from(vec![
                Span::raw("  Output format: "),
                Span::styled(format.clone(), Styles::success()),
            ]));
        }
        lines
    }

    pub fn render(f: &mut Frame, area: Rect, selection: &Selection) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        f.render_widget(Paragraph::new(Self::lines(selection)), area);
    }
}

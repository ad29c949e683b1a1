//! Navigation bar component
//!
//! A persistent bottom bar showing the keys of the current phase.

use super::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Spans making up the bar: `[key] label` pairs separated by two spaces
    fn spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Styles::text_muted()));
            }
            spans.push(Span::styled("[", Styles::text_muted()));
            spans.push(Span::styled(item.key_display.as_str(), Styles::nav_key()));
            spans.push(Span::styled("]", Styles::text_muted()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(item.action_label.as_str(), Styles::text()));
        }
        spans
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let paragraph = Paragraph::new(Line::from(self.spans())).style(Styles::nav_bar());
        f.render_widget(paragraph, area);
    }

    /// Rows the bar occupies
    pub fn height() -> u16 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_bracket_each_key() {
        let nav_bar = NavBar::new(vec![
            NavBarItem {
                key_display: "Up/Dn".to_string(),
                action_label: "Navigate".to_string(),
            },
            NavBarItem {
                key_display: "Ctrl+C".to_string(),
                action_label: "Quit".to_string(),
            },
        ]);

        let text: String = nav_bar.spans().iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Up/Dn] Navigate  [Ctrl+C] Quit");
    }

    #[test]
    fn test_empty_bar_has_no_spans() {
        assert!(NavBar::new(Vec::new()).spans().is_empty());
    }
}

//! Output format list
//!
//! A titled single-select list. Rows are numbered and the highlighted row is
//! marked with `>`.

use super::keybindings::{KeyAction, Keybinding, format_list_bindings, resolve};
use crate::config::FormatCatalog;
use crate::scrolling::ScrollState;
use crate::theme::Styles;
use crate::wizard::OptionList;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Title shown above the formats
pub const FORMAT_LIST_TITLE: &str = "Which format do you want?";

#[derive(Debug, Clone)]
pub struct FormatListState {
    title: String,
    items: Vec<String>,
    scroll: ScrollState,
    bindings: Vec<Keybinding>,
}

impl FormatListState {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        let scroll = ScrollState::new(items.len(), items.len().max(1));
        Self {
            title: title.into(),
            items,
            scroll,
            bindings: format_list_bindings(),
        }
    }

    pub fn from_catalog(catalog: &FormatCatalog) -> Self {
        Self::new(FORMAT_LIST_TITLE, catalog.items().to_vec())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.scroll.selected_index
    }

    /// Text of row `index` as drawn, without the cursor column
    pub fn row_label(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|item| format!("{}. {}", index + 1, item))
    }
}

impl OptionList for FormatListState {
    fn handle_key(&mut self, key: KeyEvent) {
        match resolve(&self.bindings, &key) {
            Some(KeyAction::NavigateUp) => self.scroll.move_up(),
            Some(KeyAction::NavigateDown) => self.scroll.move_down(),
            Some(KeyAction::First) => self.scroll.move_to_first(),
            Some(KeyAction::Last) => self.scroll.move_to_last(),
            _ => {}
        }
    }

    fn highlighted(&self) -> Option<&str> {
        self.items.get(self.scroll.selected_index).map(String::as_str)
    }

    fn set_page_size(&mut self, rows: usize) {
        self.scroll.update_visible_items(rows);
    }

    fn render(&self, f: &mut Frame, area: Rect) {
        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = (start..end)
            .filter_map(|index| {
                let label = self.row_label(index)?;
                let highlighted = index == self.scroll.selected_index;
                let (cursor, style) = if highlighted {
                    ("> ", Styles::selected())
                } else {
                    ("  ", Styles::text())
                };
                Some(ListItem::new(Line::from(vec![
                    Span::styled(cursor, style),
                    Span::styled(label, style),
                ])))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .title_style(Styles::title())
            .border_style(Styles::border());
        f.render_widget(List::new(items).block(block), area);
    }
}

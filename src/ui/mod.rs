//! User interface rendering module
//!
//! - `header` - status and output format lines
//!
//! The content area holds whichever collaborator the current phase needs:
//! the file browser while no file is chosen, the format list while choosing
//! a format, and a closing note once both are set.

mod header;

pub use header::HeaderRenderer;

use crate::app::Phase;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::Styles;
use crate::wizard::{FilePicker, OptionList, SelectionWizard};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub content: Rect,
    pub nav: Rect,
}

impl UiLayout {
    /// Split `area` for a header of `header_height` rows
    pub fn new(area: Rect, header_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(header_height),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(NavBar::height()),
            ])
            .split(area);

        Self {
            header: chunks[1],
            content: chunks[3],
            nav: chunks[4],
        }
    }

    /// Rows available to a bordered list in the content area
    pub fn list_rows(&self) -> usize {
        self.content.height.saturating_sub(2) as usize
    }
}

/// Main UI renderer
#[derive(Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Layout used for a terminal of `area` with the wizard in its current state
    pub fn layout<B: FilePicker, L: OptionList>(
        &self,
        area: Rect,
        wizard: &SelectionWizard<B, L>,
    ) -> UiLayout {
        UiLayout::new(area, HeaderRenderer::height(wizard.selection()))
    }

    /// Render one frame
    pub fn render<B: FilePicker, L: OptionList>(
        &self,
        f: &mut Frame,
        wizard: &SelectionWizard<B, L>,
        keybindings: &KeybindingContext,
    ) {
        let layout = self.layout(f.area(), wizard);
        let phase = wizard.phase();

        HeaderRenderer::render(f, layout.header, wizard.selection());

        match phase {
            Phase::Browsing => wizard.browser().render(f, layout.content),
            Phase::ChoosingFormat => wizard.formats().render(f, layout.content),
            Phase::Done => {
                let note = if wizard.selection().terminated {
                    "  Quitting..."
                } else {
                    "  All set. Press Ctrl+C to exit."
                };
                f.render_widget(Paragraph::new(note).style(Styles::text_muted()), layout.content);
            }
        }

        NavBar::new(keybindings.get_nav_items(phase)).render(f, layout.nav);
    }
}

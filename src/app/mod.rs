//! Application module
//!
//! Owns the wizard, the deferred event queue and the renderer, and runs the
//! terminal event loop.
//!
//! # Module Structure
//! - `state` - Selection and phase types
//! - Main module - App struct and event loop

mod state;

pub use state::{Phase, Selection};

use crate::components::file_browser::FileBrowserState;
use crate::components::format_list::FormatListState;
use crate::components::keybindings::KeybindingContext;
use crate::config::{ERROR_DISPLAY_DURATION, PickerConfig};
use crate::error::Result;
use crate::timers::DeferredQueue;
use crate::ui::UiRenderer;
use crate::wizard::{SelectionWizard, WizardCommand, WizardEvent};
use crossterm::event::{Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest time the loop blocks on input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The wizard wired to the real collaborators
pub type PickerWizard = SelectionWizard<FileBrowserState, FormatListState>;

/// Main application struct
pub struct App {
    wizard: PickerWizard,
    /// Timed events waiting to be fed back into the wizard
    deferred: DeferredQueue<WizardEvent>,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    pub fn new(config: &PickerConfig) -> Self {
        let browser = FileBrowserState::from_config(config);
        let formats = FormatListState::from_catalog(&config.catalog);
        info!(
            dir = %browser.current_dir.display(),
            allowed = ?config.allowed.iter().collect::<Vec<_>>(),
            formats = config.catalog.len(),
            "Picker initialized"
        );
        if config.catalog.is_empty() {
            warn!("No output formats configured; a format can never be chosen");
        }

        Self {
            wizard: SelectionWizard::new(browser, formats, ERROR_DISPLAY_DURATION),
            deferred: DeferredQueue::new(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn wizard(&self) -> &PickerWizard {
        &self.wizard
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Number of deferred events not yet delivered
    pub fn pending_events(&self) -> usize {
        self.deferred.len()
    }

    pub fn into_selection(self) -> Selection {
        self.wizard.into_selection()
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            let size = terminal.size()?;
            self.handle_resize(size.width, size.height);

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.wizard, &self.keybinding_context)
            })?;

            let timeout = self.deferred.poll_timeout(Instant::now(), POLL_INTERVAL);
            if crossterm::event::poll(timeout)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.dispatch(WizardEvent::Key(key_event), Instant::now()) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.handle_resize(width, height);
                    }
                    _ => {}
                }
            }

            if self.deliver_due(Instant::now()) {
                break;
            }
        }

        info!(phase = %self.wizard.phase(), "Main loop finished");
        Ok(())
    }

    /// Feed one event to the wizard and carry out its commands.
    /// Returns true when the loop should stop.
    pub fn dispatch(&mut self, event: WizardEvent, now: Instant) -> bool {
        let mut quit = false;
        for command in self.wizard.handle_event(event) {
            match command {
                WizardCommand::ScheduleErrorClear { delay, generation } => {
                    debug!(generation, ?delay, "Scheduling error clear");
                    self.deferred
                        .schedule(now, delay, WizardEvent::ClearError { generation });
                }
                WizardCommand::Quit => quit = true,
            }
        }
        quit
    }

    /// Dispatch every deferred event that is due at `now`
    pub fn deliver_due(&mut self, now: Instant) -> bool {
        let mut quit = false;
        for event in self.deferred.take_due(now) {
            quit |= self.dispatch(event, now);
        }
        quit
    }

    /// Recompute the list page size for a terminal of the given size
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let layout = self
            .ui_renderer
            .layout(Rect::new(0, 0, width, height), &self.wizard);
        self.wizard.set_page_size(layout.list_rows());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AllowedExtensions;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::fs;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> WizardEvent {
        WizardEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// A directory holding only `notes.txt`, so the cursor sits on it after one Down
    fn app_over_text_file() -> (TempDir, App) {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        let config = PickerConfig {
            start_dir: dir.path().to_path_buf(),
            allowed: AllowedExtensions::default(),
            catalog: Default::default(),
            show_hidden: false,
        };
        (dir, App::new(&config))
    }

    #[test]
    fn test_error_clear_is_delivered_after_delay() {
        let (_dir, mut app) = app_over_text_file();
        let start = Instant::now();

        app.dispatch(key(KeyCode::Down), start);
        assert!(!app.dispatch(key(KeyCode::Enter), start));
        assert!(app.wizard().selection().last_error.is_some());
        assert_eq!(app.pending_events(), 1);

        app.deliver_due(start + Duration::from_millis(1500));
        assert!(app.wizard().selection().last_error.is_some());

        app.deliver_due(start + ERROR_DISPLAY_DURATION);
        assert!(app.wizard().selection().last_error.is_none());
        assert_eq!(app.pending_events(), 0);
    }

    #[test]
    fn test_retriggered_error_survives_first_deadline() {
        let (_dir, mut app) = app_over_text_file();
        let start = Instant::now();

        app.dispatch(key(KeyCode::Down), start);
        app.dispatch(key(KeyCode::Enter), start);
        let later = start + Duration::from_secs(1);
        app.dispatch(key(KeyCode::Enter), later);

        app.deliver_due(start + ERROR_DISPLAY_DURATION);
        assert!(app.wizard().selection().last_error.is_some());

        app.deliver_due(later + ERROR_DISPLAY_DURATION);
        assert!(app.wizard().selection().last_error.is_none());
    }

    #[test]
    fn test_ctrl_c_stops_loop() {
        let (_dir, mut app) = app_over_text_file();
        let quit = app.dispatch(
            WizardEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Instant::now(),
        );
        assert!(quit);
        assert!(app.into_selection().terminated);
    }

    #[test]
    fn test_small_terminal_still_shows_browser() {
        let (_dir, mut app) = app_over_text_file();
        app.handle_resize(80, 10);
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|f| {
                app.ui_renderer
                    .render(f, app.wizard(), app.keybinding_context())
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Pick a file:"));
        assert!(text.contains("notes.txt"));
    }
}

//! Selection wizard
//!
//! A reducer over serial events: each call to [`SelectionWizard::handle_event`]
//! mutates the [`Selection`] and returns the commands the event loop must
//! carry out (schedule a deferred event, stop). The wizard never touches the
//! terminal or the clock, so every transition can be driven from tests with
//! stub collaborators.
//!
//! Dispatch order for a key press:
//! 1. nothing happens once the user has quit;
//! 2. Ctrl+C quits from any phase;
//! 3. Enter after a file is chosen confirms the highlighted format;
//! 4. any other key reaches the file browser, whose signal only counts while
//!    no file is chosen;
//! 5. while choosing a format the key also reaches the format list.

use crate::app::{Phase, Selection};
use crate::components::keybindings::is_hard_quit;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What the file browser reports after handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerSignal {
    /// Navigation only, nothing confirmed
    Idle,
    /// The user confirmed a file that passes the extension filter
    Selected(PathBuf),
    /// The user tried to confirm a file that fails the extension filter
    Disallowed(PathBuf),
}

/// Directory browser collaborator
pub trait FilePicker {
    fn handle_key(&mut self, key: KeyEvent) -> PickerSignal;
    fn render(&self, f: &mut Frame, area: Rect);
    /// Rows available for entries, used for paging
    fn set_page_size(&mut self, _rows: usize) {}
}

/// Single-select list collaborator
pub trait OptionList {
    fn handle_key(&mut self, key: KeyEvent);
    fn highlighted(&self) -> Option<&str>;
    fn render(&self, f: &mut Frame, area: Rect);
    fn set_page_size(&mut self, _rows: usize) {}
}

/// Input to the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Key(KeyEvent),
    /// Deferred clear of the error raised by invalid selection `generation`
    ClearError { generation: u64 },
}

/// Side effects requested by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    /// Deliver `WizardEvent::ClearError { generation }` after `delay`
    ScheduleErrorClear { delay: Duration, generation: u64 },
    /// Stop the event loop
    Quit,
}

/// Two-phase controller: pick a file, then pick a format
pub struct SelectionWizard<B: FilePicker, L: OptionList> {
    selection: Selection,
    browser: B,
    formats: L,
    error_delay: Duration,
    /// Bumped on every invalid selection; only the latest clear applies
    error_generation: u64,
}

impl<B: FilePicker, L: OptionList> SelectionWizard<B, L> {
    pub fn new(browser: B, formats: L, error_delay: Duration) -> Self {
        Self {
            selection: Selection::default(),
            browser,
            formats,
            error_delay,
            error_generation: 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn into_selection(self) -> Selection {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn formats(&self) -> &L {
        &self.formats
    }

    /// Forward the number of list rows available to both collaborators
    pub fn set_page_size(&mut self, rows: usize) {
        self.browser.set_page_size(rows);
        self.formats.set_page_size(rows);
    }

    /// Apply one event and return the commands it produced
    pub fn handle_event(&mut self, event: WizardEvent) -> Vec<WizardCommand> {
        if self.selection.terminated {
            debug!(?event, "Ignoring event after quit");
            return Vec::new();
        }

        match event {
            WizardEvent::Key(key) => self.handle_key(key),
            WizardEvent::ClearError { generation } => {
                self.clear_error(generation);
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<WizardCommand> {
        if is_hard_quit(&key) {
            info!(phase = %self.phase(), "Hard quit requested");
            self.selection.terminated = true;
            return vec![WizardCommand::Quit];
        }

        if key.code == KeyCode::Enter && self.selection.selected_file.is_some() {
            self.confirm_format();
            return Vec::new();
        }

        let mut commands = Vec::new();
        let signal = self.browser.handle_key(key);
        if self.selection.selected_file.is_none() {
            match signal {
                PickerSignal::Selected(path) => self.accept_file(path),
                PickerSignal::Disallowed(path) => commands.push(self.reject_file(path)),
                PickerSignal::Idle => {}
            }
        }

        if self.phase() == Phase::ChoosingFormat {
            self.formats.handle_key(key);
        }

        commands
    }

    fn accept_file(&mut self, path: PathBuf) {
        info!(file = %path.display(), "File selected");
        self.selection.selected_file = Some(path);
        self.selection.last_error = None;
    }

    fn reject_file(&mut self, path: PathBuf) -> WizardCommand {
        let message = format!("{} is not valid.", path.display());
        warn!("{}", message);
        self.selection.selected_file = None;
        self.selection.last_error = Some(message);
        self.error_generation += 1;
        WizardCommand::ScheduleErrorClear {
            delay: self.error_delay,
            generation: self.error_generation,
        }
    }

    fn confirm_format(&mut self) {
        if self.phase() != Phase::ChoosingFormat {
            return;
        }
        match self.formats.highlighted() {
            Some(token) => {
                info!(format = token, "Output format selected");
                self.selection.output_format = Some(token.to_string());
            }
            None => debug!("Enter pressed with no format highlighted"),
        }
    }

    fn clear_error(&mut self, generation: u64) {
        if generation != self.error_generation {
            debug!(generation, latest = self.error_generation, "Stale error clear");
            return;
        }
        if self.selection.last_error.take().is_some() {
            debug!(generation, "Error message cleared");
        }
    }
}

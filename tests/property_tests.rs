//! Property-Based Tests for mediapick
//!
//! Uses proptest to drive the wizard with random event sequences and check:
//! - a format is only ever chosen after a file
//! - nothing changes once the user has quit
//! - error messages only exist while browsing
//! - scroll and extension helpers stay within their bounds

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mediapick::app::Phase;
use mediapick::config::AllowedExtensions;
use mediapick::scrolling::ScrollState;
use mediapick::wizard::{
    FilePicker, OptionList, PickerSignal, SelectionWizard, WizardCommand, WizardEvent,
};
use proptest::prelude::*;
use ratatui::{Frame, layout::Rect};
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// Stub collaborators
// =============================================================================

/// Browser that answers Enter with the next scripted signal, cycling
struct ScriptedPicker {
    script: Vec<PickerSignal>,
    next: usize,
}

impl FilePicker for ScriptedPicker {
    fn handle_key(&mut self, key: KeyEvent) -> PickerSignal {
        if key.code != KeyCode::Enter || self.script.is_empty() {
            return PickerSignal::Idle;
        }
        let signal = self.script[self.next % self.script.len()].clone();
        self.next += 1;
        signal
    }

    fn render(&self, _f: &mut Frame, _area: Rect) {}
}

struct FixedList {
    items: Vec<String>,
    cursor: usize,
}

impl OptionList for FixedList {
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down if self.cursor + 1 < self.items.len() => self.cursor += 1,
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            _ => {}
        }
    }

    fn highlighted(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    fn render(&self, _f: &mut Frame, _area: Rect) {}
}

// =============================================================================
// Strategies
// =============================================================================

fn signal_strategy() -> impl Strategy<Value = PickerSignal> {
    prop_oneof![
        Just(PickerSignal::Idle),
        "[a-z]{1,8}\\.(mp3|wav|mov)".prop_map(|name| PickerSignal::Selected(PathBuf::from(name))),
        "[a-z]{1,8}\\.(txt|png)".prop_map(|name| PickerSignal::Disallowed(PathBuf::from(name))),
    ]
}

fn event_strategy() -> impl Strategy<Value = WizardEvent> {
    let key = |code| WizardEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
    prop_oneof![
        4 => Just(key(KeyCode::Enter)),
        3 => Just(key(KeyCode::Down)),
        2 => Just(key(KeyCode::Up)),
        1 => Just(key(KeyCode::Char('x'))),
        2 => (0u64..6).prop_map(|generation| WizardEvent::ClearError { generation }),
        1 => Just(WizardEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))),
    ]
}

fn wizard(script: Vec<PickerSignal>) -> SelectionWizard<ScriptedPicker, FixedList> {
    SelectionWizard::new(
        ScriptedPicker { script, next: 0 },
        FixedList {
            items: [".mp3", ".wav", ".mp4", ".mov", ".avi"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cursor: 0,
        },
        Duration::from_secs(2),
    )
}

// =============================================================================
// Wizard properties
// =============================================================================

proptest! {
    /// A format is only set when a file was already selected before the event
    #[test]
    fn format_follows_file(
        script in prop::collection::vec(signal_strategy(), 1..4),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut w = wizard(script);
        for event in events {
            let had_file = w.selection().selected_file.is_some();
            let had_format = w.selection().output_format.is_some();
            w.handle_event(event);
            if w.selection().output_format.is_some() && !had_format {
                prop_assert!(had_file);
            }
            if w.selection().output_format.is_some() {
                prop_assert!(w.selection().selected_file.is_some());
            }
        }
    }

    /// Once terminated, no event changes the selection or produces commands
    #[test]
    fn quit_freezes_selection(
        script in prop::collection::vec(signal_strategy(), 1..4),
        before in prop::collection::vec(event_strategy(), 0..30),
        after in prop::collection::vec(event_strategy(), 0..30),
    ) {
        let mut w = wizard(script);
        for event in before {
            w.handle_event(event);
        }
        w.handle_event(WizardEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        let frozen = w.selection().clone();
        prop_assert!(frozen.terminated);
        prop_assert_eq!(w.phase(), Phase::Done);

        for event in after {
            prop_assert!(w.handle_event(event).is_empty());
            prop_assert_eq!(w.selection(), &frozen);
        }
    }

    /// An error message never coexists with a chosen file, and every
    /// scheduled clear carries a fresh generation
    #[test]
    fn errors_only_while_browsing(
        script in prop::collection::vec(signal_strategy(), 1..4),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut w = wizard(script);
        let mut last_generation = 0;
        for event in events {
            for command in w.handle_event(event) {
                if let WizardCommand::ScheduleErrorClear { generation, delay } = command {
                    prop_assert!(generation > last_generation);
                    prop_assert_eq!(delay, Duration::from_secs(2));
                    last_generation = generation;
                }
            }
            if w.selection().last_error.is_some() {
                prop_assert!(w.selection().selected_file.is_none());
                let error = w.selection().last_error.as_deref();
                prop_assert!(error.is_some_and(|e| e.ends_with(" is not valid.")));
            }
        }
    }
}

// =============================================================================
// Helper properties
// =============================================================================

proptest! {
    /// Extension matching ignores case and needs the final extension
    #[test]
    fn extension_match_ignores_case(stem in "[a-zA-Z0-9_]{1,12}", upper in any::<bool>()) {
        let allowed = AllowedExtensions::default();
        let ext = if upper { "MP4" } else { "mp4" };
        let path = format!("{}.{}", stem, ext);
        let double = format!("{}.mp4.txt", stem);
        prop_assert!(allowed.matches(Path::new(&path)));
        prop_assert!(!allowed.matches(Path::new(&double)));
    }

    /// The cursor stays on an item and inside the visible window
    #[test]
    fn scroll_cursor_stays_visible(
        total in 0usize..50,
        visible in 1usize..20,
        moves in prop::collection::vec(0u8..6, 0..40),
    ) {
        let mut scroll = ScrollState::new(total, visible);
        for m in moves {
            match m {
                0 => scroll.move_up(),
                1 => scroll.move_down(),
                2 => scroll.page_up(),
                3 => scroll.page_down(),
                4 => scroll.move_to_first(),
                _ => scroll.move_to_last(),
            }
            prop_assert!(scroll.selected_index < total.max(1));
            let (start, end) = scroll.visible_range();
            if total > 0 {
                prop_assert!(start <= scroll.selected_index && scroll.selected_index < end);
            }
        }
    }
}

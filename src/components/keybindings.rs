//! Keybinding system for phase-aware keyboard shortcuts
//!
//! One table per collaborator drives both the actual key handling and the
//! hint bar, so what the bar shows is what the keys do.

use crate::app::Phase;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    First,
    Last,
    /// Descend into a directory
    Open,
    /// Descend into a directory or confirm a file
    Select,
    /// Go to the parent directory
    Back,
    /// Jump to the home directory
    GoHome,
    /// Confirm the highlighted format
    Confirm,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key press triggers this binding. Shift is ignored so that
    /// `G` and `~` match however the terminal reports them.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.key == key.code && (key.modifiers & relevant) == (self.modifiers & relevant)
    }
}

/// Find the action bound to a key press
pub fn resolve(bindings: &[Keybinding], key: &KeyEvent) -> Option<KeyAction> {
    bindings.iter().find(|b| b.matches(key)).map(|b| b.action)
}

/// Ctrl+C, the quit key in every phase
pub fn is_hard_quit(key: &KeyEvent) -> bool {
    resolve(&global_bindings(), key) == Some(KeyAction::Quit)
}

/// Bindings available in every phase
pub fn global_bindings() -> Vec<Keybinding> {
    vec![Keybinding::with_modifiers(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
        KeyAction::Quit,
        "Ctrl+C",
        "Quit",
    )]
}

/// Bindings understood by the file browser. The first binding of an action
/// is the one shown in the hint bar.
pub fn browser_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Move up"),
        Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "k", "Move up"),
        Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Move down"),
        Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "j", "Move down"),
        Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
        Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
        Keybinding::new(KeyCode::Char('K'), KeyAction::PageUp, "K", "Page up"),
        Keybinding::new(KeyCode::Char('J'), KeyAction::PageDown, "J", "Page down"),
        Keybinding::new(KeyCode::Home, KeyAction::First, "Home", "Go to first"),
        Keybinding::new(KeyCode::Char('g'), KeyAction::First, "g", "Go to first"),
        Keybinding::new(KeyCode::End, KeyAction::Last, "End", "Go to last"),
        Keybinding::new(KeyCode::Char('G'), KeyAction::Last, "G", "Go to last"),
        Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select"),
        Keybinding::new(KeyCode::Right, KeyAction::Open, "Right", "Open dir"),
        Keybinding::new(KeyCode::Char('l'), KeyAction::Open, "l", "Open dir"),
        Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Parent dir"),
        Keybinding::new(KeyCode::Char('h'), KeyAction::Back, "h", "Parent dir"),
        Keybinding::new(KeyCode::Backspace, KeyAction::Back, "Bksp", "Parent dir"),
        Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Parent dir"),
        Keybinding::new(KeyCode::Char('~'), KeyAction::GoHome, "~", "Home dir"),
    ]
}

/// Bindings understood by the format list
pub fn format_list_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Move up"),
        Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "k", "Move up"),
        Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Move down"),
        Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "j", "Move down"),
        Keybinding::new(KeyCode::Home, KeyAction::First, "Home", "Go to first"),
        Keybinding::new(KeyCode::Char('g'), KeyAction::First, "g", "Go to first"),
        Keybinding::new(KeyCode::End, KeyAction::Last, "End", "Go to last"),
        Keybinding::new(KeyCode::Char('G'), KeyAction::Last, "G", "Go to last"),
        Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Choose format"),
    ]
}

/// Phase-aware keybinding registry, used for the hint bar
pub struct KeybindingContext {
    /// Phase-specific keybindings
    phase_bindings: HashMap<Phase, Vec<Keybinding>>,
    /// Global keybindings (available in all phases)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut phase_bindings = HashMap::new();
        phase_bindings.insert(Phase::Browsing, browser_bindings());
        phase_bindings.insert(Phase::ChoosingFormat, format_list_bindings());
        phase_bindings.insert(Phase::Done, Vec::new());

        Self {
            phase_bindings,
            global_bindings: global_bindings(),
        }
    }

    /// Get keybindings for a phase (includes global bindings)
    pub fn get_bindings(&self, phase: Phase) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(phase_bindings) = self.phase_bindings.get(&phase) {
            bindings.extend(phase_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, phase: Phase) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(phase);

        let priority_actions = match phase {
            Phase::Browsing => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Open,
                KeyAction::Back,
                KeyAction::GoHome,
                KeyAction::Quit,
            ],
            Phase::ChoosingFormat => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Confirm,
                KeyAction::Quit,
            ],
            Phase::Done => vec![KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            let is_nav = matches!(action, KeyAction::NavigateUp | KeyAction::NavigateDown);
            if is_nav && has_nav {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                // Combine Up/Down navigation
                if is_nav {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                    has_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

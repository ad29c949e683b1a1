//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles the picker uses.
//!
//! # Usage
//! ```rust
//! use mediapick::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Hint bar background
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// 256-color palette index of the chosen-file highlight
    pub const CHOSEN_INDEX: u8 = 212;

    /// Highlight for the chosen file in the header and final report
    pub const CHOSEN: Color = Color::Indexed(Self::CHOSEN_INDEX);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // Entry Colors
    // -------------------------------------------------------------------------

    pub const DIRECTORY: Color = Color::Blue;

    pub const AUDIO_FILE: Color = Color::Green;

    pub const VIDEO_FILE: Color = Color::Yellow;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint key color
    pub const NAV_KEY: Color = Color::Cyan;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Selected/highlighted row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted row over an entry that cannot be picked
    pub fn selected_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .bg(Colors::SELECTED_BG)
    }

    /// Entry that fails the extension filter
    pub fn disabled() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// The file the user confirmed
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::CHOSEN)
            .add_modifier(Modifier::BOLD)
    }

    /// Error message style
    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn nav_bar() -> Style {
        Style::default().bg(Colors::BG_SECONDARY)
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::NAV_KEY)
            .add_modifier(Modifier::BOLD)
    }
}

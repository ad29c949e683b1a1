//! UI Components module
//!
//! Reusable pieces of the picker TUI.

pub mod file_browser;
pub mod format_list;
pub mod keybindings;
pub mod nav_bar;

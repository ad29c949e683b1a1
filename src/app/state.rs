//! Application state definitions
//!
//! `Selection` is the only state that survives a run: what the user picked,
//! the transient error message, and whether they quit. `Phase` is derived
//! from it and decides which collaborator receives input.

use std::path::PathBuf;
use strum::Display;

/// Wizard phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Phase {
    /// Waiting for a media file to be confirmed in the browser
    Browsing,
    /// A file is confirmed, waiting for an output format
    ChoosingFormat,
    /// Format confirmed or the user quit
    Done,
}

/// Persistent state for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Absolute path of the confirmed source file
    pub selected_file: Option<PathBuf>,
    /// Confirmed output format token
    pub output_format: Option<String>,
    /// Message shown after an invalid pick, cleared by a deferred event
    pub last_error: Option<String>,
    /// Set on hard-quit; no mutation happens afterwards
    pub terminated: bool,
}

impl Selection {
    pub fn phase(&self) -> Phase {
        if self.terminated || self.output_format.is_some() {
            Phase::Done
        } else if self.selected_file.is_none() {
            Phase::Browsing
        } else {
            Phase::ChoosingFormat
        }
    }
}

//! Final report printed after the terminal is restored

use crate::app::Selection;
use crate::error::Result;
use crate::theme::Colors;
use crossterm::style::{Color, Stylize};
use serde::Serialize;
use std::path::PathBuf;

/// What the user ended up with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    pub selected_file: Option<PathBuf>,
    pub output_format: Option<String>,
    /// Whether the run ended with Ctrl+C
    pub quit: bool,
}

impl From<&Selection> for SelectionReport {
    fn from(selection: &Selection) -> Self {
        Self {
            selected_file: selection.selected_file.clone(),
            output_format: selection.output_format.clone(),
            quit: selection.terminated,
        }
    }
}

impl SelectionReport {
    /// Human-readable report. The file is colored when `styled` is set.
    pub fn render(&self, styled: bool) -> String {
        let file = self
            .selected_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let file = if styled {
            file.with(Color::AnsiValue(Colors::CHOSEN_INDEX)).bold().to_string()
        } else {
            file
        };

        let mut out = format!("\n  You selected: {}\n", file);
        if let Some(ref format) = self.output_format {
            out.push_str(&format!("  Output format: {}\n", format));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

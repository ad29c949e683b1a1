//! Startup configuration
//!
//! Holds the two immutable tables the wizard is built from: the extensions a
//! user may pick, and the output formats offered afterwards. Neither changes
//! during a run.

use crate::types::MediaFormat;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long an invalid-selection message stays on screen
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(2);

/// Default relative path of the diagnostic log
pub const DEFAULT_LOG_FILE: &str = "debug.txt";

/// Set of file extensions that may be confirmed in the browser
///
/// Extensions are stored lowercase with their leading dot (`.mp3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions {
    extensions: BTreeSet<String>,
}

impl AllowedExtensions {
    /// Build from any list of extensions; a missing leading dot is added
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| {
                let e = e.as_ref().trim().to_lowercase();
                if e.starts_with('.') { e } else { format!(".{}", e) }
            })
            .filter(|e| e.len() > 1)
            .collect();
        Self { extensions }
    }

    /// Check whether a path's final extension is allowed
    pub fn matches(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.extensions.contains(&ext)
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for AllowedExtensions {
    fn default() -> Self {
        Self::new(MediaFormat::tokens())
    }
}

/// Ordered list of output-format tokens offered in the second phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCatalog {
    items: Vec<String>,
}

impl FormatCatalog {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::new(MediaFormat::tokens())
    }
}

/// Everything the wizard needs at startup
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Directory the browser opens in
    pub start_dir: PathBuf,
    pub allowed: AllowedExtensions,
    pub catalog: FormatCatalog,
    /// Whether dot-files are listed
    pub show_hidden: bool,
}

impl PickerConfig {
    /// Configuration rooted at `start_dir`, or at the user's home directory
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.unwrap_or_else(default_start_dir),
            allowed: AllowedExtensions::default(),
            catalog: FormatCatalog::default(),
            show_hidden: false,
        }
    }
}

/// The invoking user's home directory, falling back to the working directory
pub fn default_start_dir() -> PathBuf {
    dirs::home_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}

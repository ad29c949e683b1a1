//! mediapick library
//!
//! A two-step terminal wizard: browse for an audio or video file, then choose
//! the format to convert it to.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scrolling;
pub mod theme;
pub mod timers;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, Phase, Selection};
pub use config::{AllowedExtensions, FormatCatalog, PickerConfig};
pub use error::MediaPickError;
pub use report::SelectionReport;
pub use types::{MediaFormat, MediaKind};
pub use wizard::{FilePicker, OptionList, PickerSignal, SelectionWizard, WizardCommand, WizardEvent};

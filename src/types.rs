//! Type-safe media types for mediapick
//!
//! The set of media containers the tool knows about is an enum rather than a
//! list of loose strings, so the allowed extensions and the output-format
//! catalog are derived from one place.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Broad kind of a media container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// Media container, identified by its file extension (leading dot included)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum MediaFormat {
    #[default]
    #[strum(serialize = ".mp3")]
    Mp3,
    #[strum(serialize = ".wav")]
    Wav,
    #[strum(serialize = ".mp4")]
    Mp4,
    #[strum(serialize = ".mov")]
    Mov,
    #[strum(serialize = ".avi")]
    Avi,
}

impl MediaFormat {
    /// Whether this container carries audio only or video
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Mp3 | Self::Wav => MediaKind::Audio,
            Self::Mp4 | Self::Mov | Self::Avi => MediaKind::Video,
        }
    }

    /// All formats as their dotted extension tokens, in declaration order
    pub fn tokens() -> Vec<String> {
        Self::iter().map(|f| f.to_string()).collect()
    }
}

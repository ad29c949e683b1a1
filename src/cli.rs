use crate::config::{DEFAULT_LOG_FILE, PickerConfig};
use clap::Parser;
use std::path::PathBuf;

/// mediapick - pick a media file and the format to convert it to
#[derive(Parser, Debug)]
#[command(name = "mediapick")]
#[command(about = "Browse for an audio or video file, then choose an output format")]
#[command(version)]
pub struct Cli {
    /// Directory to start browsing in (defaults to your home directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Diagnostic log file, opened in append mode
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Print the final selection as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// List dot-files in the browser
    #[arg(long)]
    pub show_hidden: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Startup configuration derived from the arguments
    pub fn picker_config(&self) -> PickerConfig {
        PickerConfig {
            show_hidden: self.show_hidden,
            ..PickerConfig::new(self.dir.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mediapick"]).unwrap();
        assert_eq!(cli.log_file, PathBuf::from("debug.txt"));
        assert!(cli.dir.is_none());
        assert!(!cli.json);
        assert!(!cli.picker_config().show_hidden);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "mediapick",
            "--dir",
            "/music",
            "--log-file",
            "/tmp/pick.log",
            "--json",
            "--show-hidden",
        ])
        .unwrap();

        let config = cli.picker_config();
        assert_eq!(config.start_dir, PathBuf::from("/music"));
        assert!(config.show_hidden);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/pick.log"));
        assert!(cli.json);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["mediapick", "--format", "mp3"]).is_err());
    }
}

//! File browser component for picking a media file
//!
//! Lists a directory (directories first, then files, each sorted
//! case-insensitively). Files that fail the extension filter are still shown,
//! greyed out, so confirming one can be reported as a disallowed selection.
//! Only Enter confirms a file; Right and `l` just open directories.

use super::keybindings::{KeyAction, Keybinding, browser_bindings, resolve};
use crate::config::{AllowedExtensions, PickerConfig, default_start_dir};
use crate::scrolling::ScrollState;
use crate::theme::{Colors, Styles};
use crate::types::{MediaFormat, MediaKind};
use crate::wizard::{FilePicker, PickerSignal};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rows assumed visible until the first resize arrives
const DEFAULT_PAGE_SIZE: usize = 15;

/// File entry in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    /// Whether a file passes the extension filter (always true for directories)
    pub allowed: bool,
}

impl FileEntry {
    /// Create a parent directory entry (..)
    pub fn parent_dir(parent_path: PathBuf) -> Self {
        Self {
            name: "..".to_string(),
            path: parent_path,
            is_dir: true,
            size: 0,
            allowed: true,
        }
    }
}

/// State for the file browser
#[derive(Debug, Clone)]
pub struct FileBrowserState {
    /// Current directory being browsed
    pub current_dir: PathBuf,
    /// Entries in the current directory
    pub entries: Vec<FileEntry>,
    /// Extension filter
    pub allowed: AllowedExtensions,
    /// Whether dot-files are listed
    pub show_hidden: bool,
    /// Error from the last directory read, if any
    pub error: Option<String>,
    scroll: ScrollState,
    bindings: Vec<Keybinding>,
}

impl FileBrowserState {
    /// Create a new file browser starting at the given directory
    pub fn new(start_dir: &Path, allowed: AllowedExtensions, show_hidden: bool) -> Self {
        let current_dir = if start_dir.is_dir() {
            fs::canonicalize(start_dir).unwrap_or_else(|_| start_dir.to_path_buf())
        } else {
            warn!(dir = %start_dir.display(), "Start directory not found, using fallback");
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
        };

        let mut state = Self {
            current_dir,
            entries: Vec::new(),
            allowed,
            show_hidden,
            error: None,
            scroll: ScrollState::new(0, DEFAULT_PAGE_SIZE),
            bindings: browser_bindings(),
        };

        state.refresh_entries();
        state
    }

    /// Create a browser from the startup configuration
    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(&config.start_dir, config.allowed.clone(), config.show_hidden)
    }

    /// Index of the highlighted entry
    pub fn selected(&self) -> usize {
        self.scroll.selected_index
    }

    /// Highlighted entry, if the directory is not empty
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.scroll.selected_index)
    }

    /// Re-read the current directory and move the cursor to the top
    pub fn refresh_entries(&mut self) {
        self.entries.clear();
        self.error = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry::parent_dir(parent.to_path_buf()));
        }

        match fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                let mut dirs: Vec<FileEntry> = Vec::new();
                let mut files: Vec<FileEntry> = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();

                    if !self.show_hidden && name.starts_with('.') {
                        continue;
                    }

                    let is_dir = path.is_dir();
                    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                    let allowed = is_dir || self.allowed.matches(&path);

                    let file_entry = FileEntry {
                        name,
                        path,
                        is_dir,
                        size,
                        allowed,
                    };
                    if is_dir {
                        dirs.push(file_entry);
                    } else {
                        files.push(file_entry);
                    }
                }

                dirs.sort_by_key(|a| a.name.to_lowercase());
                files.sort_by_key(|a| a.name.to_lowercase());

                self.entries.extend(dirs);
                self.entries.extend(files);
            }
            Err(e) => {
                debug!(dir = %self.current_dir.display(), error = %e, "Directory read failed");
                self.error = Some(format!("Failed to read directory: {}", e));
            }
        }

        self.scroll.reset(self.entries.len());
    }

    fn change_dir(&mut self, dir: PathBuf) {
        debug!(dir = %dir.display(), "Changing directory");
        self.current_dir = dir;
        self.refresh_entries();
    }

    /// Descend into the highlighted directory. Files are left alone.
    pub fn open_selected(&mut self) {
        if let Some(entry) = self.selected_entry().filter(|e| e.is_dir).cloned() {
            self.change_dir(entry.path);
        }
    }

    /// Descend into the highlighted directory or confirm the highlighted file
    pub fn select_highlighted(&mut self) -> PickerSignal {
        let Some(entry) = self.selected_entry().cloned() else {
            return PickerSignal::Idle;
        };

        if entry.is_dir {
            self.change_dir(entry.path);
            PickerSignal::Idle
        } else if entry.allowed {
            PickerSignal::Selected(entry.path)
        } else {
            PickerSignal::Disallowed(entry.path)
        }
    }

    /// Go to the parent directory, keeping the cursor on the directory we left
    pub fn go_parent(&mut self) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let left = self.current_dir.clone();
        self.change_dir(parent);
        if let Some(index) = self.entries.iter().position(|e| e.path == left) {
            self.scroll.set_selected(index);
        }
    }

    /// Go to the home directory
    pub fn go_home(&mut self) {
        self.change_dir(default_start_dir());
    }
}

impl FilePicker for FileBrowserState {
    fn handle_key(&mut self, key: KeyEvent) -> PickerSignal {
        match resolve(&self.bindings, &key) {
            Some(KeyAction::NavigateUp) => self.scroll.move_up(),
            Some(KeyAction::NavigateDown) => self.scroll.move_down(),
            Some(KeyAction::PageUp) => self.scroll.page_up(),
            Some(KeyAction::PageDown) => self.scroll.page_down(),
            Some(KeyAction::First) => self.scroll.move_to_first(),
            Some(KeyAction::Last) => self.scroll.move_to_last(),
            Some(KeyAction::Open) => self.open_selected(),
            Some(KeyAction::Select) => return self.select_highlighted(),
            Some(KeyAction::Back) => self.go_parent(),
            Some(KeyAction::GoHome) => self.go_home(),
            _ => {}
        }
        PickerSignal::Idle
    }

    fn set_page_size(&mut self, rows: usize) {
        self.scroll.update_visible_items(rows);
    }

    fn render(&self, f: &mut Frame, area: Rect) {
        let error_height = if self.error.is_some() { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(error_height)])
            .split(area);

        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let (start, end) = visible_window(
            self.scroll.selected_index,
            self.scroll.offset,
            self.entries.len(),
            visible_height,
        );

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| entry_line(entry, start + i == self.scroll.selected_index))
            .map(ListItem::new)
            .collect();

        let list_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.current_dir.display()))
            .title_style(Styles::title())
            .border_style(Styles::border());
        f.render_widget(List::new(items).block(list_block), chunks[0]);

        if let Some(ref error) = self.error {
            f.render_widget(Paragraph::new(error.as_str()).style(Styles::error()), chunks[1]);
        }
    }
}

/// Window of entries to draw so the cursor stays visible even when the area is
/// smaller than the page size the scroll state was built for
fn visible_window(selected: usize, offset: usize, total: usize, height: usize) -> (usize, usize) {
    if height == 0 || total == 0 {
        return (0, 0);
    }
    let mut start = offset.min(total.saturating_sub(1));
    if selected < start {
        start = selected;
    } else if selected >= start + height {
        start = selected + 1 - height;
    }
    (start, (start + height).min(total))
}

fn entry_line(entry: &FileEntry, highlighted: bool) -> Line<'static> {
    let color = if entry.is_dir {
        Colors::DIRECTORY
    } else {
        let format = entry
            .path
            .extension()
            .and_then(|ext| format!(".{}", ext.to_string_lossy()).parse::<MediaFormat>().ok());
        match format.map(|f| f.kind()) {
            Some(MediaKind::Audio) => Colors::AUDIO_FILE,
            Some(MediaKind::Video) => Colors::VIDEO_FILE,
            None => Colors::FG_PRIMARY,
        }
    };

    let style = match (highlighted, entry.allowed) {
        (true, true) => Styles::selected(),
        (true, false) => Styles::selected_disabled(),
        (false, true) => Style::default().fg(color),
        (false, false) => Styles::disabled(),
    };

    let cursor = if highlighted { ">" } else { " " };
    let name = if entry.is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };
    let size_str = if entry.is_dir {
        String::new()
    } else {
        format_size(entry.size)
    };

    Line::from(vec![
        Span::styled(format!("{} ", cursor), style),
        Span::styled(format!("{:<40}", name), style),
        Span::styled(format!("{:>10}", size_str), style),
    ])
}

/// Format file size in human-readable format
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.1} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{} B", size)
    }
}

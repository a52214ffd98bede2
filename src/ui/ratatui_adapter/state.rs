//! Application state for the ratatui TUI
//!
//! Holds presentation-only state: the rows currently listed, the cursor over
//! them, the overlay mode and transient status messages. Navigation and
//! card order live in the [`StudySession`](crate::study::StudySession).

use crate::study::{ListEntry, SelectionView};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal study mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the study TUI
#[derive(Debug)]
pub struct AppState {
    /// Rows of the active selection level
    pub entries: Vec<ListEntry>,
    /// Manifest error shown instead of the rows
    pub catalog_error: Option<String>,
    /// Cursor position in `entries`
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the app should exit
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            catalog_error: None,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20,
            mode: Mode::Normal,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Replace the listed rows, keeping the cursor on `focus` when present
    pub fn show(&mut self, view: SelectionView, focus: Option<&str>) {
        match view {
            SelectionView::Error(message) => {
                self.entries.clear();
                self.catalog_error = Some(message);
            }
            SelectionView::Entries(entries) => {
                self.entries = entries;
                self.catalog_error = None;
            }
        }

        self.cursor = focus
            .and_then(|key| self.entries.iter().position(|e| e.key == key))
            .unwrap_or(0);
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    /// Entry under the cursor
    #[must_use]
    pub fn current_entry(&self) -> Option<&ListEntry> {
        self.entries.get(self.cursor)
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.entries.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first entry
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last entry
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the viewport
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Update the viewport height after a resize
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
        self.adjust_scroll();
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}

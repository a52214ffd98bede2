//! Output abstraction layer
//!
//! Backend-agnostic message output. The CLI writes colored lines to
//! stdout/stderr; the TUI keeps its own status messages tagged with the same
//! [`MessageLevel`].

use colored::Colorize;
use std::sync::Mutex;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use flashdeck::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that records messages instead of printing them
///
/// # Examples
///
/// ```
/// use flashdeck::ui::output::{MessageLevel, OutputWriter, RecordingWriter};
///
/// let writer = RecordingWriter::new();
/// writer.success("Loaded");
/// assert_eq!(writer.messages(), vec![(MessageLevel::Success, "Loaded".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Plain text of everything written so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.messages().into_iter().map(|(_, text)| text).collect()
    }

    fn record(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.record(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.record(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.record(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.record(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.record(MessageLevel::Info, message);
    }
}

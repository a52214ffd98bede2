//! Presentation layer
//!
//! Thin adapters that render a [`StudySession`](crate::study::StudySession)
//! and feed user input back into it. Nothing here owns selection or
//! sequencing logic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Study Core                         │
//! │   (StudySession, catalog)               │
//! └────────────────┬────────────────────────┘
//!                  │ view data / transitions
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI output    │  │ TUI adapter       │
//! │ - Stdout      │  │ - StudyApp        │
//! │   Writer      │  │   (ratatui)       │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use flashdeck::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Catalog loaded");
//! output.error("Something went wrong");
//! output.warning("Course has no cards");
//! output.info("Additional info");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::StudyApp;

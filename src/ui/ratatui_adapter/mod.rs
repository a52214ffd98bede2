//! Ratatui-based study front end
//!
//! Renders a [`StudySession`](crate::study::StudySession) in the terminal
//! and turns key presses into session transitions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              StudyApp                       │
//! │  (terminal setup, event loop, rendering)    │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │  (cursor)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Selection lists** with course details and dimmed empty courses
//! - **Card pane** showing one side at a time
//! - **Status bar** with card position, order and messages
//! - **Help overlay** (F1 / ?)

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{StudyApp, apply_action, breadcrumb};
pub use events::{EventResult, StudyAction, handle_event};
pub use state::{AppState, Mode, StatusMessage};
pub use theme::Theme;

//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to study actions. Cursor movement is
//! applied to [`AppState`] directly; everything that changes navigation or
//! the card sequence is returned as a [`StudyAction`] for the app to apply
//! to the session.

use super::state::{AppState, Mode};
use crate::study::Level;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Session-level action requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAction {
    /// Select the entry under the cursor
    Select,
    /// Go up one level
    Back,
    /// Jump back to a level
    BackTo(Level),
    /// Advance to the next card
    NextCard,
    /// Go back to the previous card
    PreviousCard,
    /// Show the other side of the current card
    Flip,
    /// Switch between original and shuffled order
    ToggleRandomize,
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Apply an action to the session
    Action(StudyAction),
    /// Leave the app
    Quit,
    /// No action taken
    Ignored,
}

/// Handle a key while browsing a selection list
fn handle_list_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor_up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor_down();
            EventResult::Continue
        }
        KeyCode::PageUp => {
            state.page_up();
            EventResult::Continue
        }
        KeyCode::PageDown => {
            state.page_down();
            EventResult::Continue
        }
        KeyCode::Home => {
            state.jump_to_start();
            EventResult::Continue
        }
        KeyCode::End => {
            state.jump_to_end();
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Right => EventResult::Action(StudyAction::Select),
        _ => EventResult::Ignored,
    }
}

/// Handle a key while studying cards
const fn handle_card_key(key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Right | KeyCode::Char('n') => EventResult::Action(StudyAction::NextCard),
        KeyCode::Left | KeyCode::Char('p') => EventResult::Action(StudyAction::PreviousCard),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up | KeyCode::Down => {
            EventResult::Action(StudyAction::Flip)
        }
        KeyCode::Char('r') => EventResult::Action(StudyAction::ToggleRandomize),
        _ => EventResult::Ignored,
    }
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, level: Level, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            EventResult::Quit
        }
        (KeyCode::F(1) | KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Esc | KeyCode::Backspace, _) => EventResult::Action(StudyAction::Back),
        (KeyCode::Char('c'), _) => EventResult::Action(StudyAction::BackTo(Level::Category)),
        (KeyCode::Char('t'), _) => EventResult::Action(StudyAction::BackTo(Level::Technology)),
        (KeyCode::Char('l'), _) => EventResult::Action(StudyAction::BackTo(Level::Course)),
        _ if level == Level::Flashcards => handle_card_key(key),
        _ => handle_list_key(state, key),
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, level: Level, mouse: MouseEvent) -> EventResult {
    match (mouse.kind, level) {
        (MouseEventKind::ScrollUp, Level::Flashcards) => {
            EventResult::Action(StudyAction::PreviousCard)
        }
        (MouseEventKind::ScrollDown, Level::Flashcards) => {
            EventResult::Action(StudyAction::NextCard)
        }
        (MouseEventKind::ScrollUp, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (MouseEventKind::ScrollDown, _) => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a single terminal event for the active `level`
pub fn handle_event(state: &mut AppState, level: Level, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match state.mode {
            Mode::Normal => handle_normal_mode(state, level, key),
            Mode::Help => handle_help_mode(state),
        },
        Event::Mouse(mouse) => handle_mouse(state, level, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    level: Level,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, level, event::read()?))
}

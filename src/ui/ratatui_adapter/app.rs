//! Ratatui study app
//!
//! Owns the terminal and the event loop. Every key that changes navigation
//! or the card sequence is turned into a [`StudyAction`] and applied to the
//! [`StudySession`]; the screen is then redrawn from the session's view data.

use super::events::{EventResult, StudyAction, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{CardPane, EntryDetails, HelpBar, HelpOverlay, SelectionList, StatusBar};
use crate::catalog::DataSource;
use crate::study::{CardView, Level, NavOutcome, NavigationState, StudySession};
use crate::ui::error::Result;
use crate::ui::output::MessageLevel;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Terminal front end for a [`StudySession`]
pub struct StudyApp {
    theme: Theme,
    tick: Duration,
}

impl Default for StudyApp {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            tick: Duration::from_millis(100),
        }
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the study UI until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::Terminal` if the terminal cannot be set up, drawn to,
    /// or polled for events.
    pub fn run<S: DataSource>(&self, session: &mut StudySession<S>) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, session);

        // Restore the terminal even when the loop failed
        if let Err(e) = Self::cleanup_terminal() {
            warn!("Terminal cleanup failed: {e}");
        }

        result
    }

    /// Setup terminal for TUI
    ///
    /// A failure after raw mode is on leaves the terminal as it was found.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let terminal = undo_on_error(
            || {
                execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
                Terminal::new(CrosstermBackend::new(io::stdout()))
            },
            || {
                let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )?;
        Ok(terminal)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop<S: DataSource>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut StudySession<S>,
    ) -> Result<()> {
        let mut state = AppState::new();
        state.show(session.selection_view(), None);
        if session.active_level() == Level::Flashcards {
            report_load_error(session, &mut state);
        }

        while !state.should_exit {
            state.cleanup_messages();

            terminal.draw(|frame| self.render(frame, &mut state, session))?;

            match poll_and_handle(&mut state, session.active_level(), self.tick)? {
                EventResult::Quit => state.should_exit = true,
                EventResult::Action(action) => apply_action(session, &mut state, action),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render<S: DataSource>(
        &self,
        frame: &mut Frame,
        state: &mut AppState,
        session: &StudySession<S>,
    ) {
        let theme = &self.theme;
        let level = session.active_level();

        let [header, content, status, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(Line::raw(breadcrumb(session.navigation()))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" flashdeck "),
        );
        frame.render_widget(title, header);

        let card_view = session.card_view();
        if level == Level::Flashcards {
            let pane = CardPane::new(&card_view, theme).title(session.course_title());
            frame.render_widget(pane, content);
        } else {
            Self::render_lists(frame, state, theme, content, level);
        }

        let messages = state.active_messages();
        let mut status_bar = StatusBar::new(&messages, theme);
        if level == Level::Flashcards {
            let position = match card_view {
                CardView::Card {
                    position, total, ..
                } => Some((position, total)),
                _ => None,
            };
            status_bar = status_bar.with_cards(position, session.controls());
        }
        frame.render_widget(status_bar, status);

        let at_top = level == session.navigation().layout().top();
        frame.render_widget(HelpBar::for_level(level, at_top, theme), help);

        if state.mode == Mode::Help {
            let overlay = HelpOverlay::new(theme, session.navigation().layout());
            frame.render_widget(overlay, frame.area());
        }
    }

    /// Selection list with the details of the entry under the cursor
    fn render_lists(
        frame: &mut Frame,
        state: &mut AppState,
        theme: &Theme,
        area: Rect,
        level: Level,
    ) {
        let [list_area, details_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        state.set_visible_height(list_area.height.saturating_sub(2) as usize);

        let list = SelectionList::new(state, theme).title(format!(" {level} "));
        frame.render_widget(list, list_area);

        if state.catalog_error.is_none() {
            frame.render_widget(EntryDetails::new(state.current_entry(), theme), details_area);
        }
    }
}

/// Run `step`; if it fails, run `undo` before passing the error on
fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    step().inspect_err(|_| undo())
}

/// Apply `action` to the session and refresh the listed rows
pub fn apply_action<S: DataSource>(
    session: &mut StudySession<S>,
    state: &mut AppState,
    action: StudyAction,
) {
    match action {
        StudyAction::Select => {
            let Some(entry) = state.current_entry().cloned() else {
                return;
            };
            if !entry.enabled {
                state.add_message(
                    MessageLevel::Warning,
                    format!("{} has no flashcards", entry.key),
                );
                return;
            }

            let outcome = session.select(&entry.key);
            debug!("Select {}: {outcome:?}", entry.key);
            if outcome.is_transition() {
                state.show(session.selection_view(), None);
                report_load_error(session, state);
            }
        }
        StudyAction::Back => {
            let before = session.navigation().clone();
            let outcome = session.go_back();
            refresh_after_back(session, state, &before, outcome);
        }
        StudyAction::BackTo(level) => {
            let before = session.navigation().clone();
            let outcome = session.back_to(level);
            refresh_after_back(session, state, &before, outcome);
        }
        StudyAction::NextCard => {
            session.next();
        }
        StudyAction::PreviousCard => {
            session.previous();
        }
        StudyAction::Flip => {
            session.flip();
        }
        StudyAction::ToggleRandomize => {
            let text = if session.toggle_randomize() {
                "Shuffled order"
            } else {
                "Original order"
            };
            state.add_message(MessageLevel::Info, text);
        }
    }
}

fn report_load_error<S: DataSource>(session: &StudySession<S>, state: &mut AppState) {
    if let Some(e) = session.load_error() {
        state.add_message(MessageLevel::Error, e.to_string());
    }
}

/// Redraw the list and put the cursor back on the entry we came from
fn refresh_after_back<S: DataSource>(
    session: &StudySession<S>,
    state: &mut AppState,
    before: &NavigationState,
    outcome: NavOutcome,
) {
    let NavOutcome::Transitioned { to, .. } = outcome else {
        return;
    };

    let focus = match to {
        Level::Category => before.selected_category().map(str::to_string),
        Level::Technology => before.selected_technology().map(str::to_string),
        Level::Course => before.selected_course().map(|c| c.id.clone()),
        Level::Flashcards => None,
    };
    state.show(session.selection_view(), focus.as_deref());
}

/// Header text: bound selections followed by the active level
#[must_use]
pub fn breadcrumb(nav: &NavigationState) -> String {
    let mut parts: Vec<String> = [nav.selected_category(), nav.selected_technology()]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

    match nav.selected_course() {
        Some(course) => parts.push(course.display_label()),
        None => parts.push(nav.active_level().to_string()),
    }

    parts.join(" › ")
}

//! Selection list widget for categories, technologies and courses

use crate::study::ListEntry;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// List of the active level's entries with a cursor and count badges
///
/// Disabled entries (courses without cards) stay visible but dimmed.
pub struct SelectionList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> SelectionList<'a> {
    /// Create a new selection list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            title: format!(" Items ({}) ", state.entries.len()),
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render a single entry
    fn render_entry(&self, entry: &'a ListEntry, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let text_style = if !entry.enabled {
            self.theme.disabled_style()
        } else if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(entry.label.as_str(), text_style),
            Span::raw("  "),
            Span::styled(entry.badge.as_str(), self.theme.badge_style()),
        ]);

        if is_cursor && entry.enabled {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for SelectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        if let Some(message) = &self.state.catalog_error {
            Paragraph::new(Line::styled(message.as_str(), self.theme.error_style()))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.entries.is_empty() {
            Paragraph::new(Line::styled("Nothing to select", self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let state = self.state;
        let visible_height = inner.height as usize;
        let start = state.scroll_offset.min(state.entries.len());
        let end = (start + visible_height).min(state.entries.len());

        let items: Vec<ListItem> = state.entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| self.render_entry(entry, start + offset == state.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}

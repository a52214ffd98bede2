//! Details pane for the entry under the cursor

use crate::study::ListEntry;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows a course's description and certifier next to the list
pub struct EntryDetails<'a> {
    entry: Option<&'a ListEntry>,
    theme: &'a Theme,
}

impl<'a> EntryDetails<'a> {
    #[must_use]
    pub const fn new(entry: Option<&'a ListEntry>, theme: &'a Theme) -> Self {
        Self { entry, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let Some(entry) = self.entry else {
            return vec![Line::styled("No details available", self.theme.dimmed_style())];
        };

        let mut lines = vec![
            Line::styled(entry.label.as_str(), self.theme.cursor_style()),
            Line::default(),
        ];
        if let Some(detail) = &entry.detail {
            lines.push(Line::raw(detail.as_str()));
            lines.push(Line::default());
        }
        if let Some(certifier) = &entry.certifier {
            lines.push(Line::styled(certifier.as_str(), self.theme.dimmed_style()));
        }
        lines.push(Line::styled(entry.badge.as_str(), self.theme.badge_style()));
        if !entry.enabled {
            lines.push(Line::default());
            lines.push(Line::styled(
                "No flashcards to study",
                self.theme.disabled_style(),
            ));
        }
        lines
    }
}

impl Widget for EntryDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Details ");

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

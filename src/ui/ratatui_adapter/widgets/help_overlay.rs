//! Help overlay widget for displaying the full keybind reference

use crate::study::Layout as StudyLayout;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
    /// Layout in use; jump keys are only listed for grouped navigation
    layout: StudyLayout,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme, layout: StudyLayout) -> Self {
        Self { theme, layout }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(
            text,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            self.heading("  Lists"),
            Line::default(),
            Self::help_line("  ↑/↓", "Move cursor"),
            Self::help_line("  PgUp/PgDn", "Page up/down"),
            Self::help_line("  Home/End", "Jump to start/end"),
            Self::help_line("  Enter", "Select"),
            Line::default(),
            self.heading("  Flashcards"),
            Line::default(),
            Self::help_line("  ←/→", "Previous/next card"),
            Self::help_line("  Space", "Flip card"),
            Self::help_line("  r", "Toggle shuffled order"),
            Line::default(),
            self.heading("  Navigation"),
            Line::default(),
            Self::help_line("  Esc", "Go back one level"),
        ];

        if self.layout == StudyLayout::Grouped {
            lines.push(Self::help_line("  c", "Back to categories"));
            lines.push(Self::help_line("  t", "Back to technologies"));
        }
        lines.push(Self::help_line("  l", "Back to courses"));
        lines.push(Self::help_line("  q", "Quit"));

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());

        lines
    }

    /// Create a help line with key and description
    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

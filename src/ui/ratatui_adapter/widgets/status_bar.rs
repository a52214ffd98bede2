//! Status bar widget for messages and the card position

use crate::study::ControlState;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and card controls
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
    /// Zero-based position and total, when a card is shown
    position: Option<(usize, usize)>,
    /// Control state, when studying
    controls: Option<ControlState>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            position: None,
            controls: None,
        }
    }

    /// Show the card position and control state
    #[must_use]
    pub const fn with_cards(
        mut self,
        position: Option<(usize, usize)>,
        controls: ControlState,
    ) -> Self {
        self.position = position;
        self.controls = Some(controls);
        self
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    /// Right-hand indicator: `Card i / N`, order and disabled arrows
    fn indicator(&self) -> Line<'static> {
        let Some(controls) = self.controls else {
            return Line::default();
        };

        let arrow = |disabled: bool, symbol: &'static str| {
            if disabled {
                Span::styled(symbol, self.theme.disabled_style())
            } else {
                Span::styled(symbol, self.theme.cursor_style())
            }
        };

        let position = self.position.map_or_else(
            || "Card - / -".to_string(),
            |(index, total)| format!("Card {} / {total}", index + 1),
        );
        let order = if controls.randomize {
            "Shuffled"
        } else {
            "In order"
        };

        Line::from(vec![
            arrow(controls.previous_disabled, "◀ "),
            Span::raw(position),
            arrow(controls.next_disabled, " ▶"),
            Span::styled(format!("  {order}"), self.theme.badge_style()),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.theme.message_style(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(self.indicator())
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

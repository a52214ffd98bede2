//! Colors and styles for the study TUI

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colors for status messages, one per non-plain level
#[derive(Debug, Clone, Copy)]
pub struct MessageColors {
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

/// Text colors for the two sides of a card
#[derive(Debug, Clone, Copy)]
pub struct CardColors {
    pub question: Color,
    pub answer: Color,
}

/// Theme for the study TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Highlighted row as (background, foreground)
    pub highlight: (Color, Color),
    /// Cursor marker, key names and section labels
    pub accent: Color,
    /// Borders, separators and disabled entries
    pub muted: Color,
    /// Card and course counts
    pub badge: Color,
    pub messages: MessageColors,
    pub cards: CardColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Theme for dark terminals (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            highlight: (Color::Blue, Color::White),
            accent: Color::Cyan,
            muted: Color::DarkGray,
            badge: Color::Magenta,
            messages: MessageColors {
                success: Color::Green,
                error: Color::Red,
                warning: Color::Yellow,
                info: Color::Cyan,
            },
            cards: CardColors {
                question: Color::White,
                answer: Color::Green,
            },
        }
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        let (bg, fg) = self.highlight;
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Entries with no cards
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        self.dimmed_style().add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        let colors = self.messages;
        match level {
            MessageLevel::Success => Style::default().fg(colors.success),
            MessageLevel::Error => self.error_style(),
            MessageLevel::Warning => Style::default().fg(colors.warning),
            MessageLevel::Info => Style::default().fg(colors.info),
            MessageLevel::Normal => self.normal_style(),
        }
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.messages.error)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.badge)
    }

    /// Card text; the answer side uses its own color
    #[must_use]
    pub fn card_style(&self, flipped: bool) -> Style {
        let color = if flipped {
            self.cards.answer
        } else {
            self.cards.question
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

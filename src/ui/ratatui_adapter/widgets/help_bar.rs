//! Help bar widget for displaying keybind hints

use crate::study::Level;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A key and the action it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

const CARD_HINTS: &[KeyHint] = &[
    hint("←/→", "prev/next"),
    hint("Space", "flip"),
    hint("r", "shuffle"),
];

const LIST_HINTS: &[KeyHint] = &[hint("↑/↓", "navigate"), hint("Enter", "select")];

/// Bottom line listing the keys that work at the active level
pub struct HelpBar<'a> {
    hints: Vec<KeyHint>,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Help bar for `level`; the back hint is left out at the top level
    #[must_use]
    pub fn for_level(level: Level, at_top: bool, theme: &'a Theme) -> Self {
        Self {
            hints: hints_for(level, at_top),
            theme,
        }
    }
}

/// Hints for the active level
#[must_use]
pub fn hints_for(level: Level, at_top: bool) -> Vec<KeyHint> {
    let base = if level == Level::Flashcards {
        CARD_HINTS
    } else {
        LIST_HINTS
    };
    let mut hints = base.to_vec();
    if !at_top {
        hints.push(hint("Esc", "back"));
    }
    hints.extend([hint("?", "help"), hint("q", "quit")]);
    hints
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

//! Card pane widget for the flashcard level

use crate::study::CardView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows one side of the current card, or the load error in its place
pub struct CardPane<'a> {
    view: &'a CardView<'a>,
    title: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> CardPane<'a> {
    #[must_use]
    pub const fn new(view: &'a CardView<'a>, theme: &'a Theme) -> Self {
        Self {
            view,
            title: None,
            theme,
        }
    }

    /// Use the course title as the block title
    #[must_use]
    pub const fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.view {
            CardView::Card {
                card,
                section,
                flipped,
                ..
            } => {
                let (heading, text) = if *flipped {
                    ("Answer", card.answer.as_str())
                } else {
                    ("Question", card.question.as_str())
                };
                vec![
                    Line::styled(*section, self.theme.dimmed_style()),
                    Line::default(),
                    Line::styled(
                        heading,
                        self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
                    ),
                    Line::default(),
                    Line::styled(text, self.theme.card_style(*flipped)),
                ]
            }
            CardView::LoadError { question, answer } => vec![
                Line::default(),
                Line::styled(
                    question.as_str(),
                    self.theme.error_style().add_modifier(Modifier::BOLD),
                ),
                Line::default(),
                Line::raw(answer.as_str()),
            ],
            CardView::Empty => vec![
                Line::default(),
                Line::styled("No flashcards loaded", self.theme.dimmed_style()),
            ],
        }
    }
}

impl Widget for CardPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self
            .title
            .map_or_else(|| " Flashcards ".to_string(), |t| format!(" {t} "));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title)
            .title_alignment(Alignment::Center);

        Paragraph::new(self.lines())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

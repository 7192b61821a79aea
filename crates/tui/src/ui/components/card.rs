use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// A card widget with rounded borders and consistent styling.
///
/// Cards are the container for every panel of the ledger and analysis views.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            theme,
            focused: false,
        }
    }

    /// Mark this card as focused (uses accent border color).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(&self) -> Block<'a> {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.theme.accent),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.surface).fg(self.theme.text))
    }

    /// Returns the inner area after accounting for borders.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    pub fn render_frame(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(self.block(), area);
    }

    /// Renders the card with the given widget as content.
    pub fn render_with<W: Widget>(&self, frame: &mut Frame<'_>, area: Rect, content: W) {
        let inner = self.inner(area);
        frame.render_widget(self.block(), area);
        frame.render_widget(content, inner);
    }
}

/// A summary card showing a label and one bold value.
pub struct StatCard<'a> {
    title: &'a str,
    value: String,
    value_color: Option<Color>,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            title,
            value: value.into(),
            value_color: None,
            theme,
        }
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = Some(color);
        self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let value = Line::from(Span::styled(
            self.value.clone(),
            Style::default()
                .fg(self.value_color.unwrap_or(self.theme.text))
                .add_modifier(Modifier::BOLD),
        ));

        Card::new(self.title, self.theme).render_with(frame, area, Paragraph::new(value));
    }
}

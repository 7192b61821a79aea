use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::{ToastLevel, ToastState},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, toast: Option<&ToastState>, theme: &Theme) {
    let Some(toast) = toast else {
        return;
    };
    let rect = toast_area(area, &toast.message);

    let style = match toast.level {
        ToastLevel::Info => Style::default().fg(theme.text),
        ToastLevel::Success => Style::default().fg(theme.positive),
        ToastLevel::Error => Style::default().fg(theme.error),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .style(Style::default().bg(theme.surface));
    let content = Paragraph::new(Line::from(toast.message.as_str())).style(style);
    frame.render_widget(Clear, rect);
    frame.render_widget(content.block(block), rect);
}

/// Bottom-right box sized to the message's display width plus borders.
fn toast_area(area: Rect, message: &str) -> Rect {
    let text_width = u16::try_from(Line::from(message).width()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(4).min(area.width);
    let height = 3u16.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area
            .y
            .saturating_add(area.height.saturating_sub(height + 1)),
        width,
        height,
    }
}

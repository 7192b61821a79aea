use engine::EntryId;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::AppState,
    ui::{components::centered_rect, theme::Theme},
};

/// Delete confirmation for one entry.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, id: EntryId, theme: &Theme) {
    let Some(entry) = state.ledger.get(id) else {
        return;
    };

    let popup = centered_rect(50, 30, area);
    let lines = vec![
        Line::from(Span::styled(
            "Delete entry?",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(entry.text.clone(), Style::default().fg(theme.text)),
            Span::raw("  "),
            super::money::styled_amount(entry.amount, state.currency, theme),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.accent)),
            Span::styled(" delete   ", Style::default().fg(theme.text_muted)),
            Span::styled("any key", Style::default().fg(theme.accent)),
            Span::styled(" cancel", Style::default().fg(theme.text_muted)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.surface));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

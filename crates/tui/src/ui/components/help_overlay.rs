use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, Section},
    ui::{
        components::{
            centered_rect,
            hints::{KeyHint, hints_to_spans},
            tabs,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if !state.show_help {
        return;
    }

    let popup = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(popup);

    let title = Line::from(vec![
        Span::styled("Help", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(theme.dim)),
        Span::raw(" close"),
    ]);

    let block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface).fg(theme.text))
    };

    frame.render_widget(
        Paragraph::new(title).block(block().title("Keybinds")),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(help_lines(state, theme)).block(block()),
        layout[1],
    );
}

fn help_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(tabs::tab_shortcuts(theme)),
        Line::from(hints_to_spans(
            &[
                KeyHint::new("t", "toggle theme"),
                KeyHint::new("T", "edit title"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ],
            theme,
        )),
        Line::from(""),
    ];

    match state.section {
        Section::Ledger => {
            lines.push(Line::from("Ledger:"));
            lines.push(Line::from(hints_to_spans(
                &[
                    KeyHint::new("↑/↓ j/k", "select"),
                    KeyHint::new("a", "add form"),
                    KeyHint::new("+", "quick add"),
                ],
                theme,
            )));
            lines.push(Line::from(hints_to_spans(
                &[
                    KeyHint::new("e", "edit selected"),
                    KeyHint::new("d", "delete selected"),
                ],
                theme,
            )));
            lines.push(Line::from(hints_to_spans(
                &[
                    KeyHint::new("Tab", "next field"),
                    KeyHint::new("←/→", "change kind, date or category"),
                    KeyHint::new("Enter", "save"),
                ],
                theme,
            )));
            lines.push(Line::from(vec![
                Span::styled("Quick add: ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    "[-|+]amount description [#category]",
                    Style::default().fg(theme.memo),
                ),
            ]));
        }
        Section::Analysis => {
            lines.push(Line::from("Analysis:"));
            lines.push(Line::from(Span::styled(
                "Expenses by category, largest first. Income is not included.",
                Style::default().fg(theme.text_muted),
            )));
        }
    }

    lines.push(Line::from(hints_to_spans(
        &[KeyHint::new("Esc", "back/close")],
        theme,
    )));

    lines
}

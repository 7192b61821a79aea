pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Mode, Section};

use components::hints::{KeyHint, hint_separator, hints_to_spans};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::{Theme, ThemeMode};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::for_mode(state.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    // Title bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Ledger => screens::ledger::render(frame, layout[2], state, &theme),
        Section::Analysis => screens::analysis::render(frame, layout[2], state, &theme),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    if let Mode::ConfirmDelete(id) = state.mode {
        components::confirm::render(frame, area, state, id, &theme);
    }
    components::help_overlay::render(frame, area, state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = vec![Span::styled(
        format!(" {}", state.title),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if state.mode == Mode::EditingTitle {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            "  editing title",
            Style::default().fg(theme.text_muted),
        ));
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        state.today.format("%Y-%m-%d").to_string(),
        Style::default().fg(theme.dim),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        state.currency.code(),
        Style::default().fg(theme.dim),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![Span::raw(" ")];
    parts.extend(components::tabs::tab_shortcuts(theme));

    let context = context_hints(state);
    if !context.is_empty() {
        parts.push(hint_separator(theme));
        parts.extend(hints_to_spans(&context, theme));
    }

    parts.push(hint_separator(theme));
    parts.extend(hints_to_spans(
        &[KeyHint::new("?", "help"), KeyHint::new("q", "quit")],
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Keyboard hints for the current section and mode.
fn context_hints(state: &AppState) -> Vec<KeyHint> {
    match state.mode {
        Mode::Adding => vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("←/→", "change"),
            KeyHint::new("Enter", "add"),
            KeyHint::new("Esc", "close"),
        ],
        Mode::Editing => vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "save"),
            KeyHint::new("Esc", "cancel"),
        ],
        Mode::QuickAdd => vec![
            KeyHint::new("Enter", "add"),
            KeyHint::new("Esc", "cancel"),
        ],
        Mode::ConfirmDelete(_) => vec![
            KeyHint::new("y", "delete"),
            KeyHint::new("any", "cancel"),
        ],
        Mode::EditingTitle => vec![KeyHint::new("Enter/Esc", "done")],
        Mode::Browse => match state.section {
            Section::Ledger => vec![
                KeyHint::new("a", "add"),
                KeyHint::new("+", "quick add"),
                KeyHint::new("e", "edit"),
                KeyHint::new("d", "delete"),
                KeyHint::new("t", "theme"),
            ],
            Section::Analysis => vec![
                KeyHint::new("t", "theme"),
                KeyHint::new("T", "title"),
            ],
        },
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use engine::{Entry, EntryKind};

use crate::{
    app::{
        AppState, Mode,
        form::{AddField, EditField, EditForm},
    },
    ui::{
        components::{
            card::{Card, StatCard},
            money::styled_amount,
        },
        theme::Theme,
    },
};

const CURSOR: &str = "▏";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let quick_height = if state.mode == Mode::QuickAdd { 3 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(quick_height),
            Constraint::Min(0),
        ])
        .split(area);

    render_summary(frame, layout[0], state, theme);
    if state.mode == Mode::QuickAdd {
        render_quick_add(frame, layout[1], state, theme);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(0)])
        .split(layout[2]);

    render_add_form(frame, body[0], state, theme);
    render_entries(frame, body[1], state, theme);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = &state.report().summary;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let balance_color = if summary.total.is_negative() {
        theme.negative
    } else {
        theme.positive
    };
    StatCard::new("Balance", summary.total.format(state.currency), theme)
        .value_color(balance_color)
        .render(frame, cols[0]);

    StatCard::new(
        "Income",
        format!("+{}", summary.income.format(state.currency)),
        theme,
    )
    .value_color(theme.positive)
    .render(frame, cols[1]);

    StatCard::new("Expense", summary.expense.format(state.currency), theme)
        .value_color(theme.negative)
        .render(frame, cols[2]);
}

fn render_quick_add(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(state.quick_input.clone(), Style::default().fg(theme.text)),
        Span::styled(CURSOR, Style::default().fg(theme.accent)),
        Span::styled(
            "   [-|+]amount description [#category]",
            Style::default().fg(theme.dim),
        ),
    ]);
    Card::new("Quick add", theme)
        .focused(true)
        .render_with(frame, area, Paragraph::new(line));
}

fn render_add_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.add_form;
    let active = state.mode == Mode::Adding;
    let field = |label: &'static str, value: String, which: AddField| {
        input_line(label, value, active && form.focus == which, theme)
    };

    let kind_color = match form.kind {
        EntryKind::Expense => theme.negative,
        EntryKind::Income => theme.positive,
    };

    let mut lines = vec![
        selector_line(
            "Kind",
            form.kind.as_str(),
            kind_color,
            active && form.focus == AddField::Kind,
            theme,
        ),
        field("Text", form.text.clone(), AddField::Text),
        field("Amount", form.amount.clone(), AddField::Amount),
        field("Date", form.date.clone(), AddField::Date),
        selector_line(
            "Category",
            form.category().label(),
            theme.memo,
            active && form.focus == AddField::Category,
            theme,
        ),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    } else if !active {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::styled(" to add an entry", Style::default().fg(theme.dim)),
        ]));
    }

    Card::new("Add entry", theme)
        .focused(active)
        .render_with(frame, area, Paragraph::new(lines));
}

fn render_entries(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let entries = state.ledger.entries();
    let card = Card::new("Entries", theme).focused(state.mode == Mode::Browse);

    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No entries yet. Press a to add one.",
            Style::default().fg(theme.dim),
        )));
        card.render_with(frame, area, empty);
        return;
    }

    let editing = match (&state.mode, &state.edit_form) {
        (Mode::Editing, Some(form)) => Some(form),
        _ => None,
    };

    let items = entries
        .iter()
        .map(|entry| match editing {
            Some(form) if form.id == entry.id => ListItem::new(edit_lines(entry, form, theme)),
            _ => ListItem::new(entry_lines(entry, state, theme)),
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.input))
        .highlight_symbol("» ");

    let inner = card.inner(area);
    card.render_frame(frame, area);
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn entry_lines(entry: &Entry, state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} | {}", entry.date.format("%Y-%m-%d"), entry.category.label()),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(vec![
            Span::styled(
                entry.text.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            styled_amount(entry.amount, state.currency, theme),
        ]),
    ];
    if !entry.memo.is_empty() {
        lines.push(Line::from(Span::styled(
            entry.memo.clone(),
            Style::default().fg(theme.memo),
        )));
    }
    lines
}

fn edit_lines(entry: &Entry, form: &EditForm, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} | {} | editing {}",
                entry.date.format("%Y-%m-%d"),
                entry.category.label(),
                entry.kind().as_str()
            ),
            Style::default().fg(theme.accent),
        )),
        input_line("Text", form.text.clone(), form.focus == EditField::Text, theme),
        input_line("Amount", form.amount.clone(), form.focus == EditField::Amount, theme),
        input_line("Memo", form.memo.clone(), form.focus == EditField::Memo, theme),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }
    lines
}

fn input_line(label: &'static str, value: String, focused: bool, theme: &Theme) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let mut spans = vec![
        Span::styled(format!("{label:<9}"), label_style),
        Span::styled(value, Style::default().fg(theme.text)),
    ];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn selector_line(
    label: &'static str,
    value: &str,
    color: Color,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let (label_style, arrows) = if focused {
        (Style::default().fg(theme.accent), Style::default().fg(theme.accent))
    } else {
        (Style::default().fg(theme.text_muted), Style::default().fg(theme.dim))
    };
    Line::from(vec![
        Span::styled(format!("{label:<9}"), label_style),
        Span::styled("‹ ", arrows),
        Span::styled(value.to_string(), Style::default().fg(color)),
        Span::styled(" ›", arrows),
    ])
}

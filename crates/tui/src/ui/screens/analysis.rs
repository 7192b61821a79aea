use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::CategoryAnalysis;

use crate::{
    app::AppState,
    ui::{
        components::{
            card::Card,
            charts::{percentage_bar, render_pie},
            money::format_percentage,
        },
        theme::Theme,
    },
};

const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let analysis = &state.report().analysis;

    if analysis.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses yet.",
                Style::default().fg(theme.text_muted),
            )),
            Line::from(Span::styled(
                "Add an expense on the Ledger view to see the breakdown.",
                Style::default().fg(theme.dim),
            )),
        ])
        .alignment(Alignment::Center);
        Card::new("Expenses by category", theme).render_with(frame, area, message);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let chart = Card::new("Expenses by category", theme);
    let chart_inner = chart.inner(cols[0]);
    chart.render_frame(frame, cols[0]);
    render_pie(frame, chart_inner, analysis, theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(legend_height(analysis.pairs.len())),
            Constraint::Min(0),
        ])
        .split(cols[1]);

    render_legend(frame, right[0], state, analysis, theme);
    render_percentages(frame, right[1], analysis, theme);
}

/// One line per category plus borders and the footer line.
fn legend_height(categories: usize) -> u16 {
    u16::try_from(categories)
        .unwrap_or(u16::MAX)
        .saturating_add(3)
}

fn render_legend(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    analysis: &CategoryAnalysis,
    theme: &Theme,
) {
    let mut lines: Vec<Line<'static>> = analysis
        .ranges
        .iter()
        .zip(&analysis.pairs)
        .map(|(range, pair)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(theme.chart_color(range.color_index))),
                Span::styled(
                    format!("{:<14}", pair.category.label()),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    pair.amount.format(state.currency),
                    Style::default().fg(theme.negative),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<14}", "total"),
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            analysis.total_expense.format(state.currency),
            Style::default()
                .fg(theme.negative)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    Card::new("Legend", theme).render_with(frame, area, Paragraph::new(lines));
}

fn render_percentages(
    frame: &mut Frame<'_>,
    area: Rect,
    analysis: &CategoryAnalysis,
    theme: &Theme,
) {
    let lines: Vec<Line<'static>> = analysis
        .percentages()
        .zip(&analysis.ranges)
        .map(|((pair, percent), range)| {
            let color = theme.chart_color(range.color_index);
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", pair.category.label()),
                    Style::default().fg(theme.text),
                ),
                Span::styled(percentage_bar(percent, BAR_WIDTH), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>6}", format_percentage(percent)),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        })
        .collect();

    Card::new("Share of expenses", theme).render_with(frame, area, Paragraph::new(lines));
}

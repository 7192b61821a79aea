use std::f64::consts::TAU;

use engine::{CategoryAnalysis, PALETTE_SIZE};
use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Points},
};

use crate::ui::theme::Theme;

/// Points of the pie chart that share one palette colour.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub color_index: usize,
    pub points: Vec<(f64, f64)>,
}

/// Samples the unit disc on a `resolution`×`resolution` grid and assigns
/// every point to the chart range covering its angle.
///
/// Angles start at 12 o'clock and grow clockwise, so the first range is the
/// slice right of the top.
#[must_use]
pub fn pie_slices(analysis: &CategoryAnalysis, resolution: usize) -> Vec<PieSlice> {
    let mut buckets: Vec<Vec<(f64, f64)>> = vec![Vec::new(); PALETTE_SIZE];
    if analysis.is_empty() || resolution < 2 {
        return Vec::new();
    }

    let step = 2.0 / (resolution - 1) as f64;
    for row in 0..resolution {
        let y = -1.0 + row as f64 * step;
        for col in 0..resolution {
            let x = -1.0 + col as f64 * step;
            if x * x + y * y > 1.0 {
                continue;
            }
            if let Some(range) = analysis.range_at(clockwise_percent(x, y)) {
                buckets[range.color_index % PALETTE_SIZE].push((x, y));
            }
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, points)| !points.is_empty())
        .map(|(color_index, points)| PieSlice {
            color_index,
            points,
        })
        .collect()
}

/// Position of `(x, y)` around the circle as a percentage of a full turn.
fn clockwise_percent(x: f64, y: f64) -> f64 {
    let angle = x.atan2(y);
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    100.0 * angle / TAU
}

/// Horizontal canvas bounds that keep the disc round in `area`.
///
/// A braille cell holds 2×4 dots and terminal cells are about twice as tall
/// as wide, so dots are square and the bounds follow the dot counts.
#[must_use]
pub fn x_bounds(area: Rect) -> [f64; 2] {
    if area.height == 0 {
        return [-1.0, 1.0];
    }
    let half = f64::from(area.width) / (2.0 * f64::from(area.height));
    [-half.max(1.0), half.max(1.0)]
}

pub fn render_pie(frame: &mut Frame<'_>, area: Rect, analysis: &CategoryAnalysis, theme: &Theme) {
    let resolution = usize::from(area.height.max(1)) * 4;
    let slices = pie_slices(analysis, resolution);
    let bounds = x_bounds(area);
    let theme = *theme;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.surface)
        .x_bounds(bounds)
        .y_bounds([-1.0, 1.0])
        .paint(move |ctx| {
            for slice in &slices {
                ctx.draw(&Points {
                    coords: &slice.points,
                    color: theme.chart_color(slice.color_index),
                });
            }
        });

    frame.render_widget(canvas, area);
}

/// Returns a bar like `████████░░` filled in proportion to `percent`.
#[must_use]
pub fn percentage_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::{Category, Entry, EntryId, Money, analyze_categories};

    use super::*;

    fn expense(amount: i64, category: Category) -> Entry {
        Entry {
            id: EntryId::new(),
            text: "x".to_string(),
            amount: Money::new(-amount),
            category,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            memo: String::new(),
        }
    }

    #[test]
    fn angles_run_clockwise_from_the_top() {
        assert!((clockwise_percent(0.0, 1.0) - 0.0).abs() < 1e-9);
        assert!((clockwise_percent(1.0, 0.0) - 25.0).abs() < 1e-9);
        assert!((clockwise_percent(0.0, -1.0) - 50.0).abs() < 1e-9);
        assert!((clockwise_percent(-1.0, 0.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn slices_cover_area_in_proportion() {
        let analysis = analyze_categories(&[
            expense(78_000, Category::Shopping),
            expense(35_000, Category::Food),
        ]);
        let slices = pie_slices(&analysis, 201);
        assert_eq!(slices.len(), 2);

        let total: usize = slices.iter().map(|slice| slice.points.len()).sum();
        let first = slices
            .iter()
            .find(|slice| slice.color_index == 0)
            .unwrap()
            .points
            .len();
        let share = 100.0 * first as f64 / total as f64;
        assert!((share - 69.0).abs() < 1.0, "share was {share}");
    }

    #[test]
    fn empty_analysis_draws_nothing() {
        assert!(pie_slices(&CategoryAnalysis::default(), 50).is_empty());
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(percentage_bar(50.0, 10), "█████░░░░░");
        assert_eq!(percentage_bar(0.0, 4), "░░░░");
        assert_eq!(percentage_bar(120.0, 4), "████");
    }

    #[test]
    fn bounds_keep_aspect() {
        assert_eq!(x_bounds(Rect::new(0, 0, 40, 10)), [-2.0, 2.0]);
        assert_eq!(x_bounds(Rect::new(0, 0, 10, 10)), [-1.0, 1.0]);
    }
}

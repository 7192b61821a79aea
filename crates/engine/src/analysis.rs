//! Category spending analysis.
//!
//! Expenses are grouped by category (absolute values), ranked by total, and
//! turned into a cumulative partition of `[0, 100)` that a circular chart can
//! draw directly.

use serde::{Deserialize, Serialize};

use crate::{Category, Entry, Money};

/// Number of colours a chart cycles through; ranges carry `rank % PALETTE_SIZE`.
pub const PALETTE_SIZE: usize = 7;

/// Absolute expense total of one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Money,
}

/// Slice of the chart owned by one category, in percent.
///
/// The range is half-open: `[start_percent, end_percent)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartRange {
    pub category: Category,
    pub start_percent: f64,
    pub end_percent: f64,
    pub color_index: usize,
}

impl ChartRange {
    pub fn width(&self) -> f64 {
        self.end_percent - self.start_percent
    }

    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.start_percent && percent < self.end_percent
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAnalysis {
    /// Sorted descending by amount; equal amounts keep first-seen order.
    pub pairs: Vec<CategoryTotal>,
    pub total_expense: Money,
    pub ranges: Vec<ChartRange>,
}

impl CategoryAnalysis {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Share of `amount` in the total expense, `None` when nothing was spent.
    pub fn percentage_of(&self, amount: Money) -> Option<f64> {
        if self.total_expense.is_positive() {
            Some(100.0 * amount.minor() as f64 / self.total_expense.minor() as f64)
        } else {
            None
        }
    }

    /// `(pair, percentage)` in rank order.
    pub fn percentages(&self) -> impl Iterator<Item = (&CategoryTotal, f64)> + '_ {
        self.pairs
            .iter()
            .filter_map(|pair| self.percentage_of(pair.amount).map(|pct| (pair, pct)))
    }

    /// The range covering `percent`, used to colour a point of the chart.
    pub fn range_at(&self, percent: f64) -> Option<&ChartRange> {
        self.ranges
            .iter()
            .find(|range| range.contains(percent))
            .or_else(|| {
                // Accumulated rounding can leave the last end a hair under 100.
                self.ranges.last().filter(|last| percent >= last.start_percent && percent < 100.0)
            })
    }
}

/// Groups expense entries by category and derives percentages and chart
/// ranges. Income entries are ignored.
pub fn analyze_categories(entries: &[Entry]) -> CategoryAnalysis {
    let mut pairs: Vec<CategoryTotal> = Vec::new();
    for entry in entries.iter().filter(|entry| entry.is_expense()) {
        let amount = entry.amount.abs();
        match pairs.iter_mut().find(|pair| pair.category == entry.category) {
            Some(pair) => pair.amount += amount,
            None => pairs.push(CategoryTotal {
                category: entry.category.clone(),
                amount,
            }),
        }
    }
    // Stable sort: ties keep first-encountered order.
    pairs.sort_by(|a, b| b.amount.cmp(&a.amount));

    let total_expense: Money = pairs.iter().map(|pair| pair.amount).sum();
    if !total_expense.is_positive() {
        return CategoryAnalysis::default();
    }

    let total = total_expense.minor() as f64;
    let mut cumulative = 0.0;
    let ranges = pairs
        .iter()
        .enumerate()
        .map(|(rank, pair)| {
            let percentage = 100.0 * pair.amount.minor() as f64 / total;
            let start_percent = cumulative;
            cumulative += percentage;
            ChartRange {
                category: pair.category.clone(),
                start_percent,
                end_percent: cumulative,
                color_index: rank % PALETTE_SIZE,
            }
        })
        .collect();

    tracing::trace!(
        categories = pairs.len(),
        total_expense = total_expense.minor(),
        "category analysis computed"
    );

    CategoryAnalysis {
        pairs,
        total_expense,
        ranges,
    }
}

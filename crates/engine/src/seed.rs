//! Sample data shown on first start.

use chrono::NaiveDate;

use crate::{Category, Entry, EntryId, Money};

fn entry(text: &str, amount: i64, category: Category, date: NaiveDate, memo: &str) -> Entry {
    Entry {
        id: EntryId::new(),
        text: text.to_string(),
        amount: Money::new(amount),
        category,
        date,
        memo: memo.to_string(),
    }
}

/// A week of July 2024 in KRW: one salary and six expenses.
pub fn demo_entries() -> Vec<Entry> {
    let day = |d| NaiveDate::from_ymd_opt(2024, 7, d).unwrap_or_default();
    vec![
        entry(
            "Lunch with coworkers",
            -35_000,
            Category::Food,
            day(22),
            "Paid first for the three of us",
        ),
        entry("July salary", 3_000_000, Category::Salary, day(21), ""),
        entry(
            "Online shopping",
            -78_000,
            Category::Shopping,
            day(20),
            "Summer clothes",
        ),
        entry("Weekend groceries", -125_000, Category::Food, day(19), ""),
        entry(
            "Streaming subscription",
            -17_000,
            Category::Subscription,
            day(18),
            "Monthly billing",
        ),
        entry("Friend's wedding gift", -100_000, Category::Event, day(17), ""),
        entry("Transit card top-up", -50_000, Category::Transport, day(16), ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze_categories, compute_summary};

    #[test]
    fn demo_data_is_sorted_and_balanced() {
        let entries = demo_entries();
        assert_eq!(entries.len(), 7);
        assert!(entries.windows(2).all(|w| w[0].date >= w[1].date));

        let summary = compute_summary(&entries);
        assert_eq!(summary.income, Money::new(3_000_000));
        assert_eq!(summary.expense, Money::new(-405_000));

        let analysis = analyze_categories(&entries);
        assert_eq!(analysis.pairs[0].category, Category::Food);
        assert_eq!(analysis.pairs[0].amount, Money::new(160_000));
        assert_eq!(analysis.total_expense, -summary.expense);
    }
}

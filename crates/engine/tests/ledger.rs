use chrono::NaiveDate;

use engine::{
    Category, EngineError, EntryKind, EntryUpdate, Ledger, Money, NewEntry, ReportCache,
    analyze_categories, compute_summary, seed,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
}

fn new_entry(kind: EntryKind, amount: i64, category: Category, day: u32) -> NewEntry {
    NewEntry {
        kind,
        text: format!("{} on {day}", category.label()),
        amount: Money::new(amount),
        category,
        date: date(day),
        memo: String::new(),
    }
}

/// Small deterministic generator so the invariants are checked over many
/// different lists without extra dependencies.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

fn random_ledger(seed_value: u64) -> Ledger {
    let mut rng = Lcg(seed_value);
    let mut ledger = Ledger::new();
    let count = rng.next() % 40;
    for _ in 0..count {
        let kind = if rng.next() % 3 == 0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        let amount = (rng.next() % 500_000 + 1) as i64;
        let category = Category::KNOWN[(rng.next() % 7) as usize].clone();
        let day = (rng.next() % 28 + 1) as u32;
        ledger
            .add(new_entry(kind, amount, category, day))
            .unwrap();
    }
    ledger
}

#[test]
fn summary_invariants_hold_for_many_lists() {
    for seed_value in 0..200 {
        let ledger = random_ledger(seed_value);
        let summary = compute_summary(ledger.entries());
        assert_eq!(summary.total, summary.income + summary.expense);
        assert!(summary.income >= Money::ZERO);
        assert!(summary.expense <= Money::ZERO);
    }
}

#[test]
fn analysis_invariants_hold_for_many_lists() {
    for seed_value in 0..200 {
        let ledger = random_ledger(seed_value);
        let summary = compute_summary(ledger.entries());
        let analysis = analyze_categories(ledger.entries());

        assert_eq!(analysis.total_expense, -summary.expense);
        let pair_sum: Money = analysis.pairs.iter().map(|p| p.amount).sum();
        assert_eq!(pair_sum, analysis.total_expense);
        assert!(analysis.pairs.windows(2).all(|w| w[0].amount >= w[1].amount));

        if analysis.total_expense.is_positive() {
            assert_eq!(analysis.ranges.len(), analysis.pairs.len());
            assert_eq!(analysis.ranges[0].start_percent, 0.0);
            for pair in analysis.ranges.windows(2) {
                assert_eq!(pair[0].end_percent, pair[1].start_percent);
            }
            let widths: f64 = analysis.ranges.iter().map(|r| r.width()).sum();
            assert!((widths - 100.0).abs() < 1e-6, "widths summed to {widths}");
        } else {
            assert!(analysis.pairs.is_empty());
            assert!(analysis.ranges.is_empty());
        }
    }
}

#[test]
fn reference_example_matches() {
    let mut ledger = Ledger::new();
    ledger
        .add(new_entry(EntryKind::Expense, 35_000, Category::Food, 22))
        .unwrap();
    ledger
        .add(new_entry(EntryKind::Income, 3_000_000, Category::Salary, 21))
        .unwrap();
    ledger
        .add(new_entry(EntryKind::Expense, 78_000, Category::Shopping, 20))
        .unwrap();

    let mut cache = ReportCache::new();
    let report = cache.get(&ledger);
    assert_eq!(report.summary.total, Money::new(2_887_000));
    assert_eq!(report.summary.income, Money::new(3_000_000));
    assert_eq!(report.summary.expense, Money::new(-113_000));

    let analysis = &report.analysis;
    let labels: Vec<&str> = analysis.pairs.iter().map(|p| p.category.label()).collect();
    assert_eq!(labels, vec!["shopping", "food"]);
    let ranges: Vec<(String, String, String)> = analysis
        .ranges
        .iter()
        .map(|r| {
            (
                r.category.label().to_string(),
                format!("{:.1}", r.start_percent),
                format!("{:.1}", r.end_percent),
            )
        })
        .collect();
    assert_eq!(
        ranges,
        vec![
            ("shopping".into(), "0.0".into(), "69.0".into()),
            ("food".into(), "69.0".into(), "100.0".into()),
        ]
    );
}

#[test]
fn crud_flow_keeps_report_in_sync() {
    let mut ledger = Ledger::with_entries(seed::demo_entries());
    let mut cache = ReportCache::new();
    assert_eq!(cache.get(&ledger).summary.expense, Money::new(-405_000));

    let id = ledger
        .add(new_entry(EntryKind::Expense, 5_000, Category::Food, 23))
        .unwrap();
    assert_eq!(ledger.entries()[0].id, id);
    assert_eq!(cache.get(&ledger).summary.expense, Money::new(-410_000));

    ledger
        .update(
            id,
            EntryUpdate {
                text: "Coffee".to_string(),
                amount: Money::new(-6_000),
                memo: "with oat milk".to_string(),
            },
        )
        .unwrap();
    assert_eq!(ledger.get(id).unwrap().amount, Money::new(-6_000));
    assert_eq!(ledger.get(id).unwrap().category, Category::Food);
    assert_eq!(cache.get(&ledger).summary.expense, Money::new(-411_000));

    ledger.remove(id).unwrap();
    assert_eq!(cache.get(&ledger).summary.expense, Money::new(-405_000));
    assert_eq!(ledger.remove(id), Err(EngineError::KeyNotFound(id.to_string())));
}

#[test]
fn largest_typed_amounts_never_overflow_reports() {
    let huge = Money::parse_major("9223372036854775807", engine::Currency::Krw).unwrap();
    let mut ledger = Ledger::new();
    ledger
        .add(new_entry(EntryKind::Expense, huge.minor(), Category::Food, 1))
        .unwrap();
    for kind in [EntryKind::Expense, EntryKind::Income] {
        assert!(matches!(
            ledger.add(new_entry(kind, huge.minor(), Category::Shopping, 2)),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    let mut cache = ReportCache::new();
    let report = cache.get(&ledger);
    assert_eq!(report.summary.expense, Money::new(-i64::MAX));
    assert_eq!(report.summary.total, Money::new(-i64::MAX));

    let analysis = analyze_categories(ledger.entries());
    assert_eq!(analysis.pairs.len(), 1);
}

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, Expense};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn expense(date: &str, amount: Decimal, category: Category) -> Expense {
    Expense {
        date: day(date),
        amount,
        category,
        description: String::new(),
    }
}

fn sample() -> Vec<Expense> {
    vec![
        expense("2024-01-01", dec!(10.00), Category::FoodAndDining),
        expense("2024-01-15", dec!(20.00), Category::FoodAndDining),
        expense("2024-02-01", dec!(5.00), Category::Shopping),
    ]
}

fn mixed() -> Vec<Expense> {
    vec![
        expense("2023-12-31", dec!(99.99), Category::Travel),
        expense("2024-03-10", dec!(12.34), Category::Utilities),
        expense("2024-01-05", dec!(0.01), Category::Other),
        expense("2024-03-11", dec!(45.00), Category::Travel),
        expense("2024-02-20", dec!(7.50), Category::Housing),
        expense("2024-02-20", dec!(7.50), Category::Housing),
    ]
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_example() {
    let s = summarize(&sample());
    assert_eq!(s.total, dec!(35.00));
    assert_eq!(s.average.round_dp(2), dec!(11.67));
    assert_eq!(s.max, dec!(20.00));
    assert_eq!(s.min, dec!(5.00));
    assert_eq!(s.count, 3);
}

#[test]
fn test_summary_empty_is_zeroed() {
    let s = summarize(&[]);
    assert_eq!(s, Summary::default());
    assert_eq!(s.total, Decimal::ZERO);
    assert_eq!(s.average, Decimal::ZERO);
    assert_eq!(s.max, Decimal::ZERO);
    assert_eq!(s.min, Decimal::ZERO);
    assert_eq!(s.count, 0);
}

#[test]
fn test_summary_single() {
    let s = summarize(&[expense("2024-01-01", dec!(4.20), Category::Other)]);
    assert_eq!(s.total, dec!(4.20));
    assert_eq!(s.average, dec!(4.20));
    assert_eq!(s.max, dec!(4.20));
    assert_eq!(s.min, dec!(4.20));
    assert_eq!(s.count, 1);
}

#[test]
fn test_summary_total_matches_category_totals() {
    for set in [sample(), mixed()] {
        let s = summarize(&set);
        let by_cat: Decimal = category_totals(&set).iter().map(|c| c.total).sum();
        assert_eq!(s.total, by_cat);
        let by_month: Decimal = monthly_totals(&set).iter().map(|m| m.total).sum();
        assert_eq!(s.total, by_month);
    }
}

// ── Category totals ───────────────────────────────────────────

#[test]
fn test_category_totals_example() {
    let totals = category_totals(&sample());
    assert_eq!(
        totals,
        vec![
            CategoryTotal {
                category: Category::FoodAndDining,
                total: dec!(30.00)
            },
            CategoryTotal {
                category: Category::Shopping,
                total: dec!(5.00)
            },
        ]
    );
}

#[test]
fn test_category_totals_sorted_descending_no_zero_rows() {
    let totals = category_totals(&mixed());
    let cats: Vec<Category> = totals.iter().map(|t| t.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Travel,
            Category::Housing,
            Category::Utilities,
            Category::Other
        ]
    );
    assert_eq!(totals[0].total, dec!(144.99));
    assert_eq!(totals[1].total, dec!(15.00));
    assert!(totals.windows(2).all(|w| w[0].total >= w[1].total));
}

#[test]
fn test_category_totals_ties_use_display_order() {
    let set = vec![
        expense("2024-01-01", dec!(5), Category::Other),
        expense("2024-01-01", dec!(5), Category::Shopping),
        expense("2024-01-01", dec!(5), Category::FoodAndDining),
    ];
    let cats: Vec<Category> = category_totals(&set).iter().map(|t| t.category).collect();
    assert_eq!(
        cats,
        vec![Category::FoodAndDining, Category::Shopping, Category::Other]
    );
}

#[test]
fn test_category_totals_empty() {
    assert!(category_totals(&[]).is_empty());
}

// ── Monthly totals ────────────────────────────────────────────

#[test]
fn test_monthly_totals_example() {
    let totals = monthly_totals(&sample());
    assert_eq!(
        totals,
        vec![
            MonthlyTotal {
                month: "2024-01".into(),
                total: dec!(30.00)
            },
            MonthlyTotal {
                month: "2024-02".into(),
                total: dec!(5.00)
            },
        ]
    );
}

#[test]
fn test_monthly_totals_chronological_across_years() {
    let months: Vec<String> = monthly_totals(&mixed())
        .into_iter()
        .map(|m| m.month)
        .collect();
    assert_eq!(months, vec!["2023-12", "2024-01", "2024-02", "2024-03"]);
}

#[test]
fn test_monthly_totals_skip_gaps() {
    let set = vec![
        expense("2024-01-31", dec!(1), Category::Other),
        expense("2024-04-01", dec!(2), Category::Other),
    ];
    let months: Vec<String> = monthly_totals(&set).into_iter().map(|m| m.month).collect();
    assert_eq!(months, vec!["2024-01", "2024-04"]);
}

#[test]
fn test_monthly_totals_empty() {
    assert!(monthly_totals(&[]).is_empty());
}

// ── Filter ────────────────────────────────────────────────────

#[test]
fn test_filter_date_range_example() {
    let f = ExpenseFilter::new(Some(day("2024-02-01")), Some(day("2024-02-28")), []);
    assert_eq!(f.apply(&sample()), vec![sample()[2].clone()]);
}

#[test]
fn test_filter_bounds_inclusive() {
    let f = ExpenseFilter::new(Some(day("2024-01-01")), Some(day("2024-01-15")), []);
    assert_eq!(f.apply(&sample()).len(), 2);
}

#[test]
fn test_filter_single_bound_is_ignored() {
    let only_start = ExpenseFilter::new(Some(day("2030-01-01")), None, []);
    assert_eq!(only_start.apply(&sample()), sample());
    let only_end = ExpenseFilter::new(None, Some(day("2000-01-01")), []);
    assert_eq!(only_end.apply(&sample()), sample());
}

#[test]
fn test_filter_default_passes_everything() {
    assert_eq!(ExpenseFilter::default().apply(&mixed()), mixed());
}

#[test]
fn test_filter_by_categories() {
    let f = ExpenseFilter::new(None, None, [Category::Shopping, Category::Travel]);
    let kept = f.apply(&sample());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].category, Category::Shopping);
}

#[test]
fn test_filter_observed_categories_is_noop() {
    for set in [sample(), mixed()] {
        let observed: Vec<Category> = set.iter().map(|e| e.category).collect();
        let f = ExpenseFilter::new(None, None, observed);
        assert_eq!(f.apply(&set), set);
    }
}

#[test]
fn test_filter_start_after_everything_is_empty() {
    let f = ExpenseFilter::new(Some(day("2025-01-01")), Some(day("2025-12-31")), []);
    let kept = f.apply(&mixed());
    assert!(kept.is_empty());
    assert_eq!(summarize(&kept), Summary::default());
    assert!(category_totals(&kept).is_empty());
    assert!(monthly_totals(&kept).is_empty());
}

#[test]
fn test_filter_start_after_end_is_empty() {
    let f = ExpenseFilter::new(Some(day("2024-02-01")), Some(day("2024-01-01")), []);
    assert!(f.apply(&sample()).is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let set = mixed();
    let before = set.clone();
    let _ = ExpenseFilter::new(None, None, [Category::Travel]).apply(&set);
    assert_eq!(set, before);
}

#[test]
fn test_filter_combined() {
    let f = ExpenseFilter::new(
        Some(day("2024-01-01")),
        Some(day("2024-12-31")),
        [Category::Travel],
    );
    let kept = f.apply(&mixed());
    assert_eq!(kept, vec![expense("2024-03-11", dec!(45.00), Category::Travel)]);
}

#[test]
fn test_toggle_category() {
    let mut f = ExpenseFilter::default();
    assert!(f.toggle_category(Category::Housing));
    assert!(f.categories.contains(&Category::Housing));
    assert!(!f.toggle_category(Category::Housing));
    assert!(f.categories.is_empty());
}

#[test]
fn test_labels() {
    let mut f = ExpenseFilter::new(Some(day("2024-01-01")), Some(day("2024-01-31")), []);
    assert_eq!(f.date_range_label(), "2024-01-01 to 2024-01-31");
    assert_eq!(f.categories_label(), "All");
    f.toggle_category(Category::Other);
    f.toggle_category(Category::FoodAndDining);
    assert_eq!(f.categories_label(), "Food & Dining, Other");
    assert_eq!(ExpenseFilter::default().date_range_label(), "All dates");
}

// ── Presets ───────────────────────────────────────────────────

#[test]
fn test_preset_windows() {
    let today = day("2024-03-15");
    assert_eq!(
        Preset::Dashboard.window(today),
        (day("2024-02-14"), today)
    );
    assert_eq!(Preset::Analysis.window(today), (day("2024-01-01"), today));
    assert_eq!(Preset::Export.window(today), (day("2023-03-16"), today));
}

#[test]
fn test_from_preset_has_no_categories() {
    let f = ExpenseFilter::from_preset(Preset::Analysis, day("2024-06-01"));
    assert_eq!(f.start, Some(day("2024-01-01")));
    assert_eq!(f.end, Some(day("2024-06-01")));
    assert!(f.categories.is_empty());
}

// ── Most recent ───────────────────────────────────────────────

#[test]
fn test_most_recent_newest_first() {
    let recent = most_recent(&mixed(), 3);
    let dates: Vec<String> = recent.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-03-11", "2024-03-10", "2024-02-20"]);
}

#[test]
fn test_most_recent_same_day_latest_recorded_first() {
    let mut a = expense("2024-01-01", dec!(1), Category::Other);
    a.description = "first".into();
    let mut b = expense("2024-01-01", dec!(2), Category::Other);
    b.description = "second".into();
    let recent = most_recent(&[a, b], 5);
    assert_eq!(recent[0].description, "second");
    assert_eq!(recent[1].description, "first");
}

#[test]
fn test_most_recent_fewer_than_n() {
    assert_eq!(most_recent(&sample(), 10).len(), 3);
    assert!(most_recent(&[], 5).is_empty());
}

#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
}

fn filter_args(from: Option<&str>, to: Option<&str>, categories: &[&str], all: bool) -> FilterArgs {
    FilterArgs {
        from: from.map(String::from),
        to: to.map(String::from),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        all,
    }
}

#[test]
fn test_resolve_filter_uses_preset_window() {
    let today = day("2024-03-15");
    let f = resolve_filter(&FilterArgs::default(), Preset::Dashboard, today).unwrap();
    assert_eq!(f.start, Some(day("2024-02-14")));
    assert_eq!(f.end, Some(today));
    assert!(f.categories.is_empty());
}

#[test]
fn test_resolve_filter_explicit_bounds_override() {
    let today = day("2024-03-15");
    let args = filter_args(Some("2024-01-01"), None, &[], false);
    let f = resolve_filter(&args, Preset::Dashboard, today).unwrap();
    assert_eq!(f.start, Some(day("2024-01-01")));
    assert_eq!(f.end, Some(today));

    let args = filter_args(None, Some("2024-03-01"), &[], false);
    let f = resolve_filter(&args, Preset::Analysis, today).unwrap();
    assert_eq!(f.start, Some(day("2024-01-01")));
    assert_eq!(f.end, Some(day("2024-03-01")));
}

#[test]
fn test_resolve_filter_all_drops_dates() {
    let args = filter_args(None, None, &["shopping"], true);
    let f = resolve_filter(&args, Preset::Export, day("2024-03-15")).unwrap();
    assert_eq!(f.start, None);
    assert_eq!(f.end, None);
    assert!(f.categories.contains(&Category::Shopping));
}

#[test]
fn test_resolve_filter_rejects_unknown_category() {
    let args = filter_args(None, None, &["Groceries"], false);
    assert!(resolve_filter(&args, Preset::Dashboard, day("2024-03-15")).is_err());
}

#[test]
fn test_resolve_filter_rejects_bad_date() {
    let args = filter_args(Some("03/01/2024"), None, &[], false);
    assert!(resolve_filter(&args, Preset::Dashboard, day("2024-03-15")).is_err());
}

#[test]
fn test_describe() {
    let e = Expense::new(day("2024-01-02"), dec!(4.5), Category::Travel, "Bus", day("2024-01-02")).unwrap();
    assert_eq!(describe(&e), "2024-01-02 $4.50 Travel (Bus)");
    let e = Expense::new(day("2024-01-02"), dec!(1200), Category::Housing, "", day("2024-01-02")).unwrap();
    assert_eq!(describe(&e), "2024-01-02 $1,200.00 Housing");
}

#[test]
fn test_add_then_summary_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::new(dir.path().join("e.csv"));
    let today = day("2024-02-10");
    let args = AddArgs {
        amount: "12.345".into(),
        category: "food & dining".into(),
        date: Some("2024-02-01".into()),
        description: Some("Tacos".into()),
    };
    cli_add(&args, &store, today).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].amount, dec!(12.35));
    assert_eq!(loaded[0].category, Category::FoodAndDining);
}

#[test]
fn test_add_rejects_future_date() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::new(dir.path().join("e.csv"));
    let args = AddArgs {
        amount: "1".into(),
        category: "Other".into(),
        date: Some("2030-01-01".into()),
        description: None,
    };
    assert!(cli_add(&args, &store, day("2024-01-01")).is_err());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_export_json_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::new(dir.path().join("e.csv"));
    let today = day("2024-02-10");
    store
        .append(Expense::new(day("2024-02-01"), dec!(3), Category::Other, "", today).unwrap())
        .unwrap();
    let out = dir.path().join("out.json");
    let args = ExportArgs {
        format: "json".into(),
        output: Some(out.clone()),
        filter: FilterArgs::default(),
    };
    cli_export(&args, &store, today).unwrap();
    let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
}

#[test]
fn test_export_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::new(dir.path().join("e.csv"));
    let args = ExportArgs {
        format: "xlsx".into(),
        output: None,
        filter: FilterArgs::default(),
    };
    assert!(cli_export(&args, &store, day("2024-01-01")).is_err());
}

#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Category;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
}

fn expense(date: &str, amount: Decimal, category: Category, description: &str) -> Expense {
    Expense {
        date: day(date),
        amount,
        category,
        description: description.into(),
    }
}

fn sample() -> Vec<Expense> {
    vec![
        expense("2024-01-01", dec!(10.00), Category::FoodAndDining, "Lunch"),
        expense("2024-01-15", dec!(20.00), Category::FoodAndDining, ""),
        expense("2024-02-01", dec!(5.00), Category::Shopping, "Socks"),
    ]
}

#[test]
fn test_json_records() {
    let json = to_json(&sample()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["date"], "2024-01-01");
    assert_eq!(arr[0]["amount"], 10.0);
    assert_eq!(arr[0]["category"], "Food & Dining");
    assert_eq!(arr[0]["description"], "Lunch");
    assert_eq!(arr[2]["category"], "Shopping");
}

#[test]
fn test_json_empty_is_empty_array() {
    let v: serde_json::Value = serde_json::from_str(&to_json(&[]).unwrap()).unwrap();
    assert_eq!(v, serde_json::json!([]));
}

#[test]
fn test_json_roundtrips_through_serde() {
    let json = to_json(&sample()).unwrap();
    let back: Vec<Expense> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn test_csv_matches_store_format() {
    let csv = to_csv(&sample()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,amount,category,description");
    assert_eq!(lines[1], "2024-01-01,10.00,Food & Dining,Lunch");
    assert_eq!(lines[2], "2024-01-15,20.00,Food & Dining,");
    assert_eq!(lines.len(), 4);
    assert_eq!(crate::store::read_csv(csv.as_bytes()).unwrap(), sample());
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let n = write_file(&sample(), ExportFormat::Json, &path).unwrap();
    assert_eq!(n, 3);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Food & Dining\""));
}

#[test]
fn test_file_name() {
    assert_eq!(
        file_name(Some(day("2024-01-01")), Some(day("2024-12-31")), ExportFormat::Csv),
        "expenses_2024-01-01_to_2024-12-31.csv"
    );
    assert_eq!(
        file_name(None, Some(day("2024-12-31")), ExportFormat::Json),
        "expenses_all_to_2024-12-31.json"
    );
}

#[test]
fn test_format_parse() {
    assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::parse(" json "), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::parse("xlsx"), None);
    assert_eq!(ExportFormat::Json.to_string(), "JSON");
}

#[test]
fn test_summary_rows() {
    let filter = ExpenseFilter::new(Some(day("2024-01-01")), Some(day("2024-02-28")), []);
    let rows = summary_rows(&sample(), &filter);
    assert_eq!(rows[0], ("Total Amount", "$35.00".to_string()));
    assert_eq!(rows[1], ("Average Expense", "$11.67".to_string()));
    assert_eq!(rows[2], ("Number of Records", "3".to_string()));
    assert_eq!(rows[3], ("Date Range", "2024-01-01 to 2024-02-28".to_string()));
    assert_eq!(rows[4], ("Categories Included", "All".to_string()));
}

#[test]
fn test_summary_rows_with_categories() {
    let filter = ExpenseFilter::new(None, None, [Category::Shopping]);
    let rows = summary_rows(&sample(), &filter);
    assert_eq!(rows[4].1, "Shopping");
}

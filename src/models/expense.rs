use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Category;

/// Storage and display format for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount accepted for a single expense. Keeps sums far from `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// One logged expense. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl Expense {
    /// Build an expense from user input, enforcing the entry-time rules:
    /// the amount is rounded to cents and must lie in `0.01..=MAX_AMOUNT`,
    /// and the date may not be later than `today`.
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self> {
        let amount = round_cents(amount);
        if amount <= Decimal::ZERO {
            anyhow::bail!("Amount must be at least 0.01, got {amount}");
        }
        if amount > MAX_AMOUNT {
            anyhow::bail!("Amount must be at most {MAX_AMOUNT}, got {amount}");
        }
        if date > today {
            anyhow::bail!(
                "Date {} is in the future (today is {})",
                date.format(DATE_FORMAT),
                today.format(DATE_FORMAT)
            );
        }
        Ok(Self {
            date,
            amount,
            category,
            description: description.into().trim().to_string(),
        })
    }

    /// Month key in `YYYY-MM` form.
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a user-entered date. Accepts `YYYY-MM-DD` and `today`.
pub fn parse_date(s: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .with_context(|| format!("Could not parse date '{trimmed}', expected YYYY-MM-DD"))
}

/// Parse a user-entered amount, tolerating a leading `$` and thousands separators.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        anyhow::bail!("Amount is required");
    }
    Decimal::from_str(&cleaned).with_context(|| format!("Failed to parse '{s}' as an amount"))
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::models::{Expense, DATE_FORMAT};
use crate::report::{summarize, ExpenseFilter};
use crate::ui::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub(crate) fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

/// Render expenses as a JSON array of `{date, amount, category, description}` records.
pub(crate) fn to_json(expenses: &[Expense]) -> Result<String> {
    serde_json::to_string_pretty(expenses).context("Failed to serialize expenses as JSON")
}

/// Render expenses in the same tabular format as the data file.
pub(crate) fn to_csv(expenses: &[Expense]) -> Result<String> {
    let mut buf = Vec::new();
    crate::store::write_csv(expenses, &mut buf)?;
    String::from_utf8(buf).context("CSV output was not valid UTF-8")
}

pub(crate) fn render(expenses: &[Expense], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(expenses),
        ExportFormat::Json => to_json(expenses),
    }
}

/// Write an export to `path`. Returns the number of records written.
pub(crate) fn write_file(expenses: &[Expense], format: ExportFormat, path: &Path) -> Result<usize> {
    let body = render(expenses, format)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    file.write_all(body.as_bytes())
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    info!("Exported {} expenses as {format} to {}", expenses.len(), path.display());
    Ok(expenses.len())
}

/// Default export file name, e.g. `expenses_2024-01-01_to_2024-12-31.csv`.
pub(crate) fn file_name(start: Option<NaiveDate>, end: Option<NaiveDate>, format: ExportFormat) -> String {
    let bound = |d: Option<NaiveDate>| {
        d.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "all".into())
    };
    format!(
        "expenses_{}_to_{}.{}",
        bound(start),
        bound(end),
        format.extension()
    )
}

/// Metric/value table shown alongside an export preview.
pub(crate) fn summary_rows(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<(&'static str, String)> {
    let s = summarize(expenses);
    vec![
        ("Total Amount", format_amount(s.total)),
        ("Average Expense", format_amount(s.average)),
        ("Number of Records", s.count.to_string()),
        ("Date Range", filter.date_range_label()),
        ("Categories Included", filter.categories_label()),
    ]
}

#[cfg(test)]
mod tests;

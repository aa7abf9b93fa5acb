use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::models::{round_cents, Category, Expense, DATE_FORMAT};

pub(crate) const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// Flat CSV file holding every recorded expense. The file is the single
/// source of truth: nothing is cached between calls.
pub(crate) struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty collection.
    pub(crate) fn load(&self) -> Result<Vec<Expense>> {
        if !self.path.exists() {
            debug!("No data file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("Failed to open data file: {}", self.path.display()))?;
        let expenses = read_csv(file)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;
        debug!("Loaded {} expenses from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    /// Replace the file contents with `expenses`.
    pub(crate) fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = std::fs::File::create(&self.path)
            .with_context(|| format!("Failed to create data file: {}", self.path.display()))?;
        write_csv(expenses, file)?;
        debug!("Saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }

    /// Reload from disk, append one record and persist. Returns the new record count.
    pub(crate) fn append(&self, expense: Expense) -> Result<usize> {
        let mut expenses = self.load()?;
        info!(
            "Recording {} {} {}",
            expense.date.format(DATE_FORMAT),
            expense.amount,
            expense.category
        );
        expenses.push(expense);
        self.save(&expenses)?;
        Ok(expenses.len())
    }
}

/// Write expenses in the persisted tabular format (header row, ISO dates, cents).
pub(crate) fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for e in expenses {
        wtr.write_record([
            e.date.format(DATE_FORMAT).to_string(),
            format!("{:.2}", round_cents(e.amount)),
            e.category.as_str().to_string(),
            e.description.clone(),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub(crate) fn read_csv<R: Read>(reader: R) -> Result<Vec<Expense>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("Missing '{name}' column"))
    };
    let date_col = column("date")?;
    let amount_col = column("amount")?;
    let category_col = column("category")?;
    let description_col = column("description").ok();

    let mut expenses = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Row 1 is the header
        let row = i + 2;
        let record = result.with_context(|| format!("Row {row}: malformed CSV"))?;
        let field = |col: usize| record.get(col).map(str::trim).unwrap_or("");

        let date = NaiveDate::parse_from_str(field(date_col), DATE_FORMAT)
            .with_context(|| format!("Row {row}: invalid date '{}'", field(date_col)))?;
        let amount = Decimal::from_str(field(amount_col))
            .with_context(|| format!("Row {row}: invalid amount '{}'", field(amount_col)))?;
        let category = Category::from_str(field(category_col))
            .with_context(|| format!("Row {row}: invalid category"))?;
        let description = description_col
            .and_then(|col| record.get(col))
            .unwrap_or("")
            .to_string();

        expenses.push(Expense {
            date,
            amount,
            category,
            description,
        });
    }
    Ok(expenses)
}

use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeSet;
use tracing::trace;

use crate::models::{Category, Expense, DATE_FORMAT};

/// Default date windows used by each view, all ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Preset {
    /// The last 30 days.
    Dashboard,
    /// January 1st of the current year through today.
    Analysis,
    /// The last 365 days.
    Export,
}

impl Preset {
    pub(crate) fn window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            Self::Dashboard => today.checked_sub_days(Days::new(30)),
            Self::Analysis => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Self::Export => today.checked_sub_days(Days::new(365)),
        };
        (start.unwrap_or(NaiveDate::MIN), today)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpenseFilter {
    pub(crate) start: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
    pub(crate) categories: BTreeSet<Category>,
}

impl ExpenseFilter {
    pub(crate) fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            start,
            end,
            categories: categories.into_iter().collect(),
        }
    }

    pub(crate) fn from_preset(preset: Preset, today: NaiveDate) -> Self {
        let (start, end) = preset.window(today);
        Self::new(Some(start), Some(end), [])
    }

    /// Date bounds only apply when both ends are present. An empty category
    /// set lets every category through.
    pub(crate) fn matches(&self, expense: &Expense) -> bool {
        let in_range = match (self.start, self.end) {
            (Some(start), Some(end)) => start <= expense.date && expense.date <= end,
            _ => true,
        };
        in_range && (self.categories.is_empty() || self.categories.contains(&expense.category))
    }

    /// Return the matching subsequence, preserving order.
    pub(crate) fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let filtered: Vec<Expense> = expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        trace!("Filter kept {}/{} expenses", filtered.len(), expenses.len());
        filtered
    }

    /// Add or remove a category from the selection. Returns whether it is now selected.
    pub(crate) fn toggle_category(&mut self, category: Category) -> bool {
        if self.categories.remove(&category) {
            false
        } else {
            self.categories.insert(category);
            true
        }
    }

    pub(crate) fn date_range_label(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!(
                "{} to {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
            _ => "All dates".into(),
        }
    }

    pub(crate) fn categories_label(&self) -> String {
        if self.categories.is_empty() {
            "All".into()
        } else {
            self.categories
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, Expense};

/// Aggregate statistics over a set of expenses. All zeros when the set is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total: Decimal,
    pub(crate) average: Decimal,
    pub(crate) max: Decimal,
    pub(crate) min: Decimal,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: Category,
    pub(crate) total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthlyTotal {
    /// Format: "YYYY-MM"
    pub(crate) month: String,
    pub(crate) total: Decimal,
}

pub(crate) fn summarize(expenses: &[Expense]) -> Summary {
    let Some(first) = expenses.first() else {
        return Summary::default();
    };

    let mut total = Decimal::ZERO;
    let mut max = first.amount;
    let mut min = first.amount;
    for e in expenses {
        total += e.amount;
        max = max.max(e.amount);
        min = min.min(e.amount);
    }

    let count = expenses.len();
    Summary {
        total,
        average: total / Decimal::from(count),
        max,
        min,
        count,
    }
}

/// Per-category sums for the categories present, largest first.
/// Equal totals keep category display order.
pub(crate) fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<Category, Decimal> = BTreeMap::new();
    for e in expenses {
        *sums.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    totals
}

/// Per-month sums in chronological order.
pub(crate) fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *sums.entry(e.month()).or_insert(Decimal::ZERO) += e.amount;
    }

    sums.into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// The `n` latest expenses, newest first. Same-day entries keep the
/// later-recorded one first.
pub(crate) fn most_recent(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted: Vec<Expense> = expenses.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

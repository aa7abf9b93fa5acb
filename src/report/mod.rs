//! Filtering and aggregation over a loaded expense collection.
//!
//! Everything here is a pure function of its input: callers load the
//! collection from the store, narrow it with an [`ExpenseFilter`], then
//! summarize it.

mod filter;
mod summary;

pub(crate) use filter::{ExpenseFilter, Preset};
pub(crate) use summary::{
    category_totals, monthly_totals, most_recent, summarize, CategoryTotal, MonthlyTotal,
    Summary,
};

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::chart::ChartSet;
use crate::models::{Expense, DATE_FORMAT};
use crate::report::{
    category_totals, monthly_totals, most_recent, summarize, CategoryTotal, ExpenseFilter,
    MonthlyTotal, Preset, Summary,
};
use crate::store::ExpenseStore;
use crate::ui::form::ExpenseForm;

const RECENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    AddExpense,
    Dashboard,
    Analysis,
    Export,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::AddExpense, Self::Dashboard, Self::Analysis, Self::Export]
    }

    /// Default filter window for screens that show filtered data.
    pub(crate) fn preset(&self) -> Option<Preset> {
        match self {
            Self::AddExpense => None,
            Self::Dashboard => Some(Preset::Dashboard),
            Self::Analysis => Some(Preset::Analysis),
            Self::Export => Some(Preset::Export),
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddExpense => write!(f, "Add Expense"),
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Analysis => write!(f, "Analysis"),
            Self::Export => write!(f, "Export"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// View state. `expenses` is only the snapshot from the last load; every
/// refresh re-reads the store.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    pub(crate) expenses: Vec<Expense>,
    pub(crate) recent: Vec<Expense>,
    pub(crate) form: ExpenseForm,

    // Each data screen keeps its own filter
    pub(crate) dashboard_filter: ExpenseFilter,
    pub(crate) analysis_filter: ExpenseFilter,
    pub(crate) export_filter: ExpenseFilter,

    // Derived from the current screen's filter
    pub(crate) filtered: Vec<Expense>,
    pub(crate) table: Vec<Expense>,
    pub(crate) summary: Summary,
    pub(crate) category_totals: Vec<CategoryTotal>,
    pub(crate) monthly_totals: Vec<MonthlyTotal>,
    pub(crate) charts: ChartSet,

    pub(crate) table_index: usize,
    pub(crate) table_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            running: true,
            screen: Screen::AddExpense,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            expenses: Vec::new(),
            recent: Vec::new(),
            form: ExpenseForm::new(today),

            dashboard_filter: ExpenseFilter::from_preset(Preset::Dashboard, today),
            analysis_filter: ExpenseFilter::from_preset(Preset::Analysis, today),
            export_filter: ExpenseFilter::from_preset(Preset::Export, today),

            filtered: Vec::new(),
            table: Vec::new(),
            summary: Summary::default(),
            category_totals: Vec::new(),
            monthly_totals: Vec::new(),
            charts: ChartSet::build(&[]),

            table_index: 0,
            table_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Reload from the store and recompute the current view.
    pub(crate) fn refresh(&mut self, store: &ExpenseStore) -> Result<()> {
        self.expenses = store.load()?;
        self.recompute();
        Ok(())
    }

    /// Recompute derived data from the last loaded snapshot.
    pub(crate) fn recompute(&mut self) {
        self.recent = most_recent(&self.expenses, RECENT_COUNT);

        self.filtered = match self.filter() {
            Some(filter) => filter.apply(&self.expenses),
            None => Vec::new(),
        };
        self.table = most_recent(&self.filtered, self.filtered.len());
        self.summary = summarize(&self.filtered);
        self.category_totals = category_totals(&self.filtered);
        self.monthly_totals = monthly_totals(&self.filtered);
        self.charts = ChartSet::build(&self.filtered);

        if self.table_index >= self.table.len() {
            self.table_index = self.table.len().saturating_sub(1);
        }
        if self.table_scroll > self.table_index {
            self.table_scroll = self.table_index;
        }
        debug!(
            "{} view: {}/{} expenses after filtering",
            self.screen,
            self.filtered.len(),
            self.expenses.len()
        );
    }

    pub(crate) fn switch_screen(&mut self, screen: Screen, store: &ExpenseStore) -> Result<()> {
        self.screen = screen;
        self.table_index = 0;
        self.table_scroll = 0;
        self.refresh(store)
    }

    pub(crate) fn filter(&self) -> Option<&ExpenseFilter> {
        match self.screen {
            Screen::AddExpense => None,
            Screen::Dashboard => Some(&self.dashboard_filter),
            Screen::Analysis => Some(&self.analysis_filter),
            Screen::Export => Some(&self.export_filter),
        }
    }

    pub(crate) fn filter_mut(&mut self) -> Option<&mut ExpenseFilter> {
        match self.screen {
            Screen::AddExpense => None,
            Screen::Dashboard => Some(&mut self.dashboard_filter),
            Screen::Analysis => Some(&mut self.analysis_filter),
            Screen::Export => Some(&mut self.export_filter),
        }
    }

    /// Restore the current screen's filter to its preset window with no categories.
    pub(crate) fn reset_filter(&mut self) {
        let today = self.today;
        if let Some(preset) = self.screen.preset() {
            if let Some(filter) = self.filter_mut() {
                *filter = ExpenseFilter::from_preset(preset, today);
            }
        }
    }

    /// Validate the form, record the expense and clear the form.
    pub(crate) fn submit_form(&mut self, store: &ExpenseStore) -> Result<()> {
        let expense = self.form.to_expense(self.today)?;
        self.record(expense, store)?;
        self.form = ExpenseForm::new(self.today);
        Ok(())
    }

    pub(crate) fn record(&mut self, expense: Expense, store: &ExpenseStore) -> Result<()> {
        let msg = format!(
            "Expense added: {} ${:.2} {}",
            expense.date.format(DATE_FORMAT),
            expense.amount,
            expense.category
        );
        store.append(expense)?;
        self.refresh(store)?;
        self.set_status(msg);
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

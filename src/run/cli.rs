use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::args::{AddArgs, Command, ExportArgs, FilterArgs};
use crate::chart::ChartSet;
use crate::export::{self, ExportFormat};
use crate::models::{parse_amount, parse_date, Category, Expense, DATE_FORMAT};
use crate::report::{
    category_totals, monthly_totals, most_recent, summarize, ExpenseFilter, Preset,
};
use crate::store::ExpenseStore;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(command: Command, store: &ExpenseStore) -> Result<()> {
    let today = Local::now().date_naive();
    debug!("Running {command:?}");
    match command {
        Command::Add(args) => cli_add(&args, store, today),
        Command::Recent { count } => cli_recent(count, store),
        Command::Summary(args) => cli_summary(&args, store, today),
        Command::Monthly(args) => cli_monthly(&args, store, today),
        Command::Charts(args) => cli_charts(&args, store, today),
        Command::Export(args) => cli_export(&args, store, today),
        Command::Categories => {
            for c in Category::all() {
                println!("{c}");
            }
            Ok(())
        }
    }
}

/// Build the filter for a command: the preset window, with either side
/// replaced by an explicit bound, or no dates at all with `--all`.
pub(crate) fn resolve_filter(
    args: &FilterArgs,
    preset: Preset,
    today: NaiveDate,
) -> Result<ExpenseFilter> {
    let categories = args
        .categories
        .iter()
        .map(|c| Category::from_str(c))
        .collect::<Result<Vec<_>>>()?;

    if args.all {
        return Ok(ExpenseFilter::new(None, None, categories));
    }

    let (default_start, default_end) = preset.window(today);
    let start = match &args.from {
        Some(s) => parse_date(s, today).context("Invalid --from")?,
        None => default_start,
    };
    let end = match &args.to {
        Some(s) => parse_date(s, today).context("Invalid --to")?,
        None => default_end,
    };
    if start > end {
        warn!("Start date {start} is after end date {end}; nothing will match");
    }
    Ok(ExpenseFilter::new(Some(start), Some(end), categories))
}

fn cli_add(args: &AddArgs, store: &ExpenseStore, today: NaiveDate) -> Result<()> {
    let date = match &args.date {
        Some(d) => parse_date(d, today)?,
        None => today,
    };
    let amount = parse_amount(&args.amount)?;
    let category = Category::from_str(&args.category)?;
    let description = args.description.clone().unwrap_or_default();

    let expense = Expense::new(date, amount, category, description, today)?;
    let line = describe(&expense);
    let count = store.append(expense)?;
    println!("Added {line}");
    println!("{count} expenses recorded in {}", store.path().display());
    Ok(())
}

fn cli_recent(count: usize, store: &ExpenseStore) -> Result<()> {
    let expenses = store.load()?;
    if expenses.is_empty() {
        println!("No expenses recorded yet. Add one with: expensetui add <amount> -c <category>");
        return Ok(());
    }
    print_table(&most_recent(&expenses, count));
    Ok(())
}

fn cli_summary(args: &FilterArgs, store: &ExpenseStore, today: NaiveDate) -> Result<()> {
    let filter = resolve_filter(args, Preset::Dashboard, today)?;
    let expenses = filter.apply(&store.load()?);
    let summary = summarize(&expenses);

    println!("Expenses: {}", filter.date_range_label());
    println!("Categories: {}", filter.categories_label());
    println!("{}", "─".repeat(40));
    println!("  Total:    {}", format_amount(summary.total));
    println!("  Average:  {}", format_amount(summary.average));
    println!("  Maximum:  {}", format_amount(summary.max));
    println!("  Minimum:  {}", format_amount(summary.min));
    println!("  Count:    {}", summary.count);

    let totals = category_totals(&expenses);
    if totals.is_empty() {
        println!();
        println!("No expenses found with the current filters.");
    } else {
        println!();
        println!("By Category:");
        for t in &totals {
            println!("  {:<20} {:>12}", t.category.as_str(), format_amount(t.total));
        }
    }
    Ok(())
}

fn cli_monthly(args: &FilterArgs, store: &ExpenseStore, today: NaiveDate) -> Result<()> {
    let filter = resolve_filter(args, Preset::Analysis, today)?;
    let expenses = filter.apply(&store.load()?);
    let totals = monthly_totals(&expenses);
    if totals.is_empty() {
        println!("No monthly data available for {}", filter.date_range_label());
        return Ok(());
    }

    println!("{:<10} {:>14}", "Month", "Total Expenses");
    println!("{}", "─".repeat(25));
    for m in &totals {
        println!("{:<10} {:>14}", m.month, format_amount(m.total));
    }
    Ok(())
}

fn cli_charts(args: &FilterArgs, store: &ExpenseStore, today: NaiveDate) -> Result<()> {
    let filter = resolve_filter(args, Preset::Analysis, today)?;
    let expenses = filter.apply(&store.load()?);
    if expenses.is_empty() {
        warn!("No expenses match the current filters; charts are empty");
    }
    let json = serde_json::to_string_pretty(&ChartSet::build(&expenses))
        .context("Failed to serialize charts")?;
    println!("{json}");
    Ok(())
}

fn cli_export(args: &ExportArgs, store: &ExpenseStore, today: NaiveDate) -> Result<()> {
    let format = ExportFormat::parse(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown export format '{}'. Use csv or json", args.format))?;
    let filter = resolve_filter(&args.filter, Preset::Export, today)?;
    let expenses = filter.apply(&store.load()?);
    if expenses.is_empty() {
        println!("No expenses match the current filters; nothing exported");
        return Ok(());
    }

    match &args.output {
        Some(path) if path.as_os_str() == "-" => {
            print!("{}", export::render(&expenses, format)?);
        }
        output => {
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export::file_name(filter.start, filter.end, format)));
            let count = export::write_file(&expenses, format, &path)?;
            println!("Exported {count} expenses to {}", path.display());
            for (metric, value) in export::summary_rows(&expenses, &filter) {
                println!("  {metric:<20} {value}");
            }
        }
    }
    Ok(())
}

fn describe(e: &Expense) -> String {
    let mut line = format!(
        "{} {} {}",
        e.date.format(DATE_FORMAT),
        format_amount(e.amount),
        e.category
    );
    if !e.description.is_empty() {
        line.push_str(&format!(" ({})", e.description));
    }
    line
}

fn print_table(expenses: &[Expense]) {
    println!(
        "{:<10}  {:>12}  {:<18}  Description",
        "Date", "Amount", "Category"
    );
    println!("{}", "─".repeat(64));
    for e in expenses {
        println!(
            "{:<10}  {:>12}  {:<18}  {}",
            e.date.format(DATE_FORMAT).to_string(),
            format_amount(e.amount),
            e.category.as_str(),
            truncate(&e.description, 30),
        );
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::Context;
use chrono::NaiveDate;

use super::app::{App, Screen};
use crate::export::{self, ExportFormat};
use crate::models::{parse_amount, parse_date, Category, Expense, DATE_FORMAT};
use crate::store::ExpenseStore;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &ExpenseStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 2024-01-15 12.50 Food & Dining; lunch)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a 12.50 Shopping)", cmd_add, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("analysis", "Go to Analysis", cmd_analysis, r);
    register_command!("n", "Go to Analysis", cmd_analysis, r);
    register_command!(
        "export",
        "Go to Export, or export this view (e.g. :export json ~/out.json)",
        cmd_export,
        r
    );
    register_command!("x", "Go to Export, or export (e.g. :x csv)", cmd_export, r);
    register_command!("from", "Set start date (e.g. :from 2024-01-01)", cmd_from, r);
    register_command!("to", "Set end date (e.g. :to 2024-01-31)", cmd_to, r);
    register_command!("all", "Include all dates", cmd_all_dates, r);
    register_command!(
        "cat",
        "Toggle category filter (e.g. :cat Travel)",
        cmd_category,
        r
    );
    register_command!("c", "Toggle category filter (e.g. :c Travel)", cmd_category, r);
    register_command!("clear", "Clear category filter", cmd_clear, r);
    register_command!("preset", "Reset filters to this screen's default", cmd_preset, r);
    register_command!("reload", "Reload expenses from disk", cmd_reload, r);
    register_command!("r", "Reload expenses from disk", cmd_reload, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Parse `[DATE] AMOUNT CATEGORY[; DESCRIPTION]`. The date defaults to today.
pub(crate) fn parse_quick_add(args: &str, today: NaiveDate) -> anyhow::Result<Expense> {
    let (head, description) = match args.split_once(';') {
        Some((head, desc)) => (head, desc.trim()),
        None => (args, ""),
    };
    let mut tokens: Vec<&str> = head.split_whitespace().collect();
    if tokens.is_empty() {
        anyhow::bail!("Usage: :add [YYYY-MM-DD] <amount> <category>[; description]");
    }

    let date = match NaiveDate::parse_from_str(tokens[0], DATE_FORMAT) {
        Ok(d) => {
            tokens.remove(0);
            d
        }
        Err(_) => today,
    };
    let amount_str = tokens
        .first()
        .ok_or_else(|| anyhow::anyhow!("Missing amount"))?;
    let amount = parse_amount(amount_str)?;
    let category = Category::from_str(&tokens[1..].join(" "))?;

    Expense::new(date, amount, category, description, today)
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &ExpenseStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        return app.switch_screen(Screen::AddExpense, store);
    }
    let expense = parse_quick_add(args, app.today)?;
    app.record(expense, store)
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::Dashboard, store)
}

fn cmd_analysis(_args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::Analysis, store)
}

/// Dashboard and Export write their own filtered selection. From any other
/// screen, or with no arguments, this switches to Export first.
fn cmd_export(args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    let exports_here = matches!(app.screen, Screen::Dashboard | Screen::Export);
    if args.is_empty() || !exports_here {
        app.switch_screen(Screen::Export, store)?;
        if args.is_empty() {
            return Ok(());
        }
    }

    let mut parts = args.splitn(2, ' ');
    let format_arg = parts.next().unwrap_or("");
    let format = ExportFormat::parse(format_arg)
        .ok_or_else(|| anyhow::anyhow!("Unknown export format '{format_arg}'. Use csv or json"))?;

    app.refresh(store)?;
    if app.filtered.is_empty() {
        app.set_status("No expense data available for the selected filters. Nothing exported");
        return Ok(());
    }

    let path = match parts.next().map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => expand_home(p),
        None => {
            let (start, end) = app.filter().map(|f| (f.start, f.end)).unwrap_or_default();
            home_dir().join(export::file_name(start, end, format))
        }
    };
    let count = export::write_file(&app.filtered, format, &path)?;
    app.set_status(format!("Exported {count} expenses to {}", path.display()));
    Ok(())
}

fn cmd_from(args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: :from YYYY-MM-DD");
    }
    let date = parse_date(args, app.today).context("Usage: :from YYYY-MM-DD")?;
    set_bound(app, store, |f| f.start = Some(date), format!("Start date: {date}"))
}

fn cmd_to(args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: :to YYYY-MM-DD");
    }
    let date = parse_date(args, app.today).context("Usage: :to YYYY-MM-DD")?;
    set_bound(app, store, |f| f.end = Some(date), format!("End date: {date}"))
}

fn cmd_all_dates(_args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    set_bound(
        app,
        store,
        |f| {
            f.start = None;
            f.end = None;
        },
        "Showing all dates".into(),
    )
}

fn cmd_category(args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    let category = Category::from_str(args)?;
    let Some(filter) = app.filter_mut() else {
        app.set_status("No filters on this screen");
        return Ok(());
    };
    let selected = filter.toggle_category(category);
    let label = filter.categories_label();
    app.refresh(store)?;
    app.set_status(if selected {
        format!("Added {category}. Categories: {label}")
    } else {
        format!("Removed {category}. Categories: {label}")
    });
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    set_bound(app, store, |f| f.categories.clear(), "Showing all categories".into())
}

fn cmd_preset(_args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    if app.filter().is_none() {
        app.set_status("No filters on this screen");
        return Ok(());
    }
    app.reset_filter();
    app.refresh(store)?;
    let label = app
        .filter()
        .map(|f| f.date_range_label())
        .unwrap_or_default();
    app.set_status(format!("Filters reset: {label}"));
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App, store: &ExpenseStore) -> anyhow::Result<()> {
    app.refresh(store)?;
    app.set_status(format!("Loaded {} expenses", app.expenses.len()));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &ExpenseStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// Apply `change` to the current screen's filter and reload.
fn set_bound(
    app: &mut App,
    store: &ExpenseStore,
    change: impl FnOnce(&mut crate::report::ExpenseFilter),
    msg: String,
) -> anyhow::Result<()> {
    match app.filter_mut() {
        Some(filter) => {
            change(filter);
            app.refresh(store)?;
            app.set_status(msg);
        }
        None => app.set_status("No filters on this screen"),
    }
    Ok(())
}

fn home_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(crate) fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

//! Command line interface for expensetui.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// expensetui: a local-only expense logger for the terminal.
///
/// Run without a subcommand to open the interactive interface. Expenses are
/// kept in a single CSV file (date, amount, category, description) in your
/// data directory unless --data-file or EXPENSETUI_DATA points elsewhere.
#[derive(Debug, Parser, Clone)]
#[command(name = "expensetui", version)]
pub(crate) struct Args {
    #[clap(flatten)]
    pub(crate) common: Common,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(Debug, ClapArgs, Clone)]
pub(crate) struct Common {
    /// Logging verbosity: off, error, warn, info, debug, trace.
    /// RUST_LOG takes precedence when set.
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    pub(crate) log_level: LevelFilter,

    /// Path to the expenses CSV file.
    #[arg(long, global = true, env = "EXPENSETUI_DATA")]
    pub(crate) data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Record a new expense.
    Add(AddArgs),
    /// Show the most recent expenses.
    Recent {
        /// How many expenses to show.
        #[arg(default_value_t = 5)]
        count: usize,
    },
    /// Print summary statistics and totals by category (default: last 30 days).
    Summary(FilterArgs),
    /// Print totals by month (default: year to date).
    Monthly(FilterArgs),
    /// Print chart descriptions as JSON (default: year to date).
    Charts(FilterArgs),
    /// Export expenses to CSV or JSON (default: last 365 days).
    Export(ExportArgs),
    /// List the expense categories.
    Categories,
}

#[derive(Debug, ClapArgs, Clone)]
pub(crate) struct AddArgs {
    /// Amount spent, e.g. 12.50
    pub(crate) amount: String,

    /// Category label, e.g. "Food & Dining". See `expensetui categories`.
    #[arg(long, short)]
    pub(crate) category: String,

    /// Date of the expense as YYYY-MM-DD. Defaults to today.
    #[arg(long, short)]
    pub(crate) date: Option<String>,

    /// Free-text description.
    #[arg(long = "description", short = 'm')]
    pub(crate) description: Option<String>,
}

/// Date range and category filters. Either date bound replaces the
/// command's default window on that side.
#[derive(Debug, ClapArgs, Clone, Default)]
pub(crate) struct FilterArgs {
    /// First day to include, YYYY-MM-DD.
    #[arg(long)]
    pub(crate) from: Option<String>,

    /// Last day to include, YYYY-MM-DD.
    #[arg(long)]
    pub(crate) to: Option<String>,

    /// Only include this category. Repeat for several.
    #[arg(long = "category", short = 'c')]
    pub(crate) categories: Vec<String>,

    /// Ignore dates entirely and include every recorded expense.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub(crate) all: bool,
}

#[derive(Debug, ClapArgs, Clone)]
pub(crate) struct ExportArgs {
    /// Output format: csv or json.
    #[arg(long, short, default_value = "csv")]
    pub(crate) format: String,

    /// Output path. Defaults to expenses_<from>_to_<to>.<ext> in the current
    /// directory. Use - for stdout.
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,

    #[clap(flatten)]
    pub(crate) filter: FilterArgs,
}

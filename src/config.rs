//! Resolved file locations for a run.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::store::ExpenseStore;

const DATA_FILE: &str = "expenses.csv";
const LOG_FILE: &str = "expensetui.log";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    data_file: PathBuf,
    log_file: PathBuf,
}

impl Config {
    /// Use `data_file` when given, otherwise `expenses.csv` in the platform
    /// data directory (created if needed). The log file sits next to the data file.
    pub(crate) fn resolve(data_file: Option<&Path>) -> Result<Self> {
        let data_file = match data_file {
            Some(path) => path.to_path_buf(),
            None => default_data_dir()?.join(DATA_FILE),
        };
        let log_file = data_file
            .parent()
            .map(|dir| dir.join(LOG_FILE))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE));
        Ok(Self {
            data_file,
            log_file,
        })
    }

    pub(crate) fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub(crate) fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub(crate) fn store(&self) -> ExpenseStore {
        ExpenseStore::new(&self.data_file)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expensetui", "ExpenseTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, PathResolver},
    domain::Expense,
    errors::{ExpenseError, Result},
    utils::persistence::write_atomic,
};

use super::{ensure_unique, position_of, ExpenseSource};

pub const STORE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    expenses: Vec<Expense>,
}

fn default_schema_version() -> u32 {
    STORE_SCHEMA_VERSION
}

/// Expense source persisted as a single JSON document.
///
/// Records with unparsable dates or amounts load with those fields absent so
/// the grouping core can report them by id.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl JsonFileSource {
    /// Opens the store at `path`, starting empty when the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let expenses = if path.exists() {
            load_expenses_from_path(&path)?
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), count = expenses.len(), "opened expense store");
        Ok(Self { path, expenses })
    }

    /// Opens `<base>/expenses.json`, using the default base when none is given.
    pub fn open_in(base: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(base);
        ensure_dir(&base)?;
        Self::open(PathResolver::store_file_in(&base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the document, dropping the in-memory snapshot.
    pub fn reload(&mut self) -> Result<()> {
        self.expenses = if self.path.exists() {
            load_expenses_from_path(&self.path)?
        } else {
            Vec::new()
        };
        Ok(())
    }

    /// Writes `next` to disk and adopts it only once the write succeeded.
    fn commit(&mut self, next: Vec<Expense>) -> Result<()> {
        save_expenses_to_path(&next, &self.path)?;
        self.expenses = next;
        Ok(())
    }
}

impl ExpenseSource for JsonFileSource {
    fn list(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn insert(&mut self, expense: Expense) -> Result<()> {
        ensure_unique(&self.expenses, &expense.id)?;
        let mut next = self.expenses.clone();
        let id = expense.id.clone();
        next.push(expense);
        self.commit(next)?;
        tracing::info!(id = %id, "recorded expense");
        Ok(())
    }

    fn update(&mut self, expense: Expense) -> Result<()> {
        let idx = position_of(&self.expenses, &expense.id)?;
        let mut next = self.expenses.clone();
        let id = expense.id.clone();
        next[idx] = expense;
        self.commit(next)?;
        tracing::info!(id = %id, "updated expense");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<Expense> {
        let idx = position_of(&self.expenses, id)?;
        let mut next = self.expenses.clone();
        let removed = next.remove(idx);
        self.commit(next)?;
        tracing::info!(id, "deleted expense");
        Ok(removed)
    }
}

pub fn load_expenses_from_path(path: &Path) -> Result<Vec<Expense>> {
    let data = fs::read_to_string(path)?;
    let document: StoreDocument = serde_json::from_str(&data)?;
    if document.schema_version > STORE_SCHEMA_VERSION {
        return Err(ExpenseError::Storage(format!(
            "`{}` uses schema version {} (supported: {})",
            path.display(),
            document.schema_version,
            STORE_SCHEMA_VERSION
        )));
    }
    Ok(document.expenses)
}

pub fn save_expenses_to_path(expenses: &[Expense], path: &Path) -> Result<()> {
    let document = StoreDocument {
        schema_version: STORE_SCHEMA_VERSION,
        expenses: expenses.to_vec(),
    };
    let json = serde_json::to_string_pretty(&document)?;
    write_atomic(path, &json)
}

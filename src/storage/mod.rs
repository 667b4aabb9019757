pub mod json_backend;
pub mod memory;

use crate::{
    domain::{Expense, Identifiable},
    errors::{ExpenseError, Result},
};

/// Owner of expense records; the grouping core only reads snapshots from it.
pub trait ExpenseSource {
    /// Current snapshot in source order.
    fn list(&self) -> Result<Vec<Expense>>;
    fn insert(&mut self, expense: Expense) -> Result<()>;
    /// Replaces the stored record carrying the same id.
    fn update(&mut self, expense: Expense) -> Result<()>;
    /// Removes a record; the change shows up in the next snapshot.
    fn delete(&mut self, id: &str) -> Result<Expense>;

    fn get(&self, id: &str) -> Result<Expense> {
        self.list()?
            .into_iter()
            .find(|expense| expense.id() == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))
    }
}

pub use json_backend::{JsonFileSource, STORE_SCHEMA_VERSION};
pub use memory::InMemorySource;

pub(crate) fn position_of<T: Identifiable>(records: &[T], id: &str) -> Result<usize> {
    records
        .iter()
        .position(|record| record.id() == id)
        .ok_or_else(|| ExpenseError::NotFound(id.to_string()))
}

pub(crate) fn ensure_unique<T: Identifiable>(records: &[T], id: &str) -> Result<()> {
    if records.iter().any(|record| record.id() == id) {
        return Err(ExpenseError::DuplicateId(id.to_string()));
    }
    Ok(())
}

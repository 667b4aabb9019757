use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the grouping core, the expense sources and the CLI.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Expense `{id}` has a missing or invalid date")]
    InvalidDate { id: String },
    #[error("Expense `{id}` has a missing or invalid amount")]
    InvalidAmount { id: String },
    #[error("Expense not found: {0}")]
    NotFound(String),
    #[error("Duplicate expense id: {0}")]
    DuplicateId(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExpenseError {
    /// Id of the offending expense for record-level faults.
    pub fn expense_id(&self) -> Option<&str> {
        match self {
            ExpenseError::InvalidDate { id }
            | ExpenseError::InvalidAmount { id }
            | ExpenseError::NotFound(id)
            | ExpenseError::DuplicateId(id) => Some(id),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, ExpenseError>;

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

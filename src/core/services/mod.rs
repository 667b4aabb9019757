pub mod expense_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use summary_service::{DayBucketReport, RejectedExpense, SummaryService};

use crate::errors::ExpenseError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error("{0}")]
    Invalid(String),
}

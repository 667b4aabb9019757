pub mod common;
pub mod day;
pub mod expense;

pub use common::{Displayable, Identifiable};
pub use day::{BucketOrder, DayBucket, DayKey};
pub use expense::{Expense, ExpenseUpdate, NewExpense, UNCATEGORIZED_LABEL};

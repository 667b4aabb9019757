#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDateTime;
use expense_core::{domain::expense::parse_timestamp, Expense};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated base directory for one test.
pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn at(raw: &str) -> NaiveDateTime {
    parse_timestamp(raw).expect("valid timestamp")
}

pub fn expense(id: &str, desc: &str, amount: f64, date: &str) -> Expense {
    Expense::with_id(id, desc, amount, at(date))
}

/// Three expenses over two days: 05/01/24 (12.0 + 3.5) and 01/02/24 (20.0).
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        expense("1", "Groceries", 12.0, "2024-01-05T09:15:00").with_category("Food"),
        expense("2", "Coffee", 3.5, "2024-01-05T16:40:00"),
        expense("3", "Train", 20.0, "2024-02-01T07:05:00"),
    ]
}

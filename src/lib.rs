#![doc(test(attr(deny(warnings))))]

//! Expense Core groups expense snapshots by calendar day and totals each
//! day for list screens, with reference expense sources, a currency
//! formatter and a small command-line front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{group_by_day, sum_amounts};
pub use crate::domain::{BucketOrder, DayBucket, DayKey, Expense};
pub use crate::errors::{ExpenseError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    domain::expense::Expense,
    errors::{ExpenseError, Result},
};

const DAY_KEY_FORMAT: &str = "%d/%m/%y";

/// Calendar day shared by the expenses of one bucket.
///
/// Displays as `dd/mm/yy`; ordering follows the calendar, not the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn label(&self) -> String {
        format!(
            "{:02}/{:02}/{:02}",
            self.0.day(),
            self.0.month(),
            self.0.year().rem_euclid(100)
        )
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for DayKey {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map(DayKey)
            .map_err(|_| ExpenseError::InvalidInput(format!("`{}` is not a dd/mm/yy day", s)))
    }
}

/// Direction in which day buckets are handed to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketOrder {
    /// Most recent day first.
    #[default]
    NewestFirst,
    OldestFirst,
    /// First-seen order of each day in the source snapshot.
    Insertion,
}

impl BucketOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketOrder::NewestFirst => "newest",
            BucketOrder::OldestFirst => "oldest",
            BucketOrder::Insertion => "insertion",
        }
    }
}

impl FromStr for BucketOrder {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "newest_first" | "desc" => Ok(BucketOrder::NewestFirst),
            "oldest" | "oldest_first" | "asc" => Ok(BucketOrder::OldestFirst),
            "insertion" | "source" => Ok(BucketOrder::Insertion),
            other => Err(ExpenseError::InvalidInput(format!(
                "unknown bucket order `{}` (expected newest, oldest or insertion)",
                other
            ))),
        }
    }
}

/// Expenses of one calendar day together with their total.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub key: DayKey,
    pub expenses: Vec<Expense>,
    pub total: f64,
}

impl DayBucket {
    pub fn label(&self) -> String {
        self.key.label()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

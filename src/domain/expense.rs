use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Label used for expenses recorded without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// A single recorded expense as supplied by an expense source.
///
/// `amount` and `date` are optional so that corrupted records can travel up
/// to the grouping core, which reports them by id instead of guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<String>,
}

impl Expense {
    pub fn new(desc: impl Into<String>, amount: f64, date: NaiveDateTime) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), desc, amount, date)
    }

    pub fn with_id(
        id: impl Into<String>,
        desc: impl Into<String>,
        amount: f64,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            desc: desc.into(),
            amount: Some(amount),
            date: Some(date),
            cat: None,
        }
    }

    pub fn with_category(mut self, cat: impl Into<String>) -> Self {
        self.cat = Some(cat.into());
        self
    }

    /// Calendar day of the expense timestamp, without timezone conversion.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|date| date.date())
    }

    /// Amount when present and finite.
    pub fn valid_amount(&self) -> Option<f64> {
        self.amount.filter(|value| value.is_finite())
    }

    pub fn category_label(&self) -> &str {
        self.cat
            .as_deref()
            .map(str::trim)
            .filter(|cat| !cat.is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        if self.desc.trim().is_empty() {
            format!("Expense {}", self.id)
        } else {
            self.desc.clone()
        }
    }
}

/// Input for creating an expense through the expense service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub desc: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub cat: Option<String>,
}

impl NewExpense {
    pub fn new(desc: impl Into<String>, amount: f64, date: NaiveDateTime) -> Self {
        Self {
            desc: desc.into(),
            amount,
            date,
            cat: None,
        }
    }

    pub fn with_category(mut self, cat: impl Into<String>) -> Self {
        self.cat = Some(cat.into());
        self
    }
}

/// Partial update applied by the edit action; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub desc: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDateTime>,
    /// `Some(None)` clears the category.
    pub cat: Option<Option<String>>,
}

/// Parses the timestamp shapes accepted from expense sources.
///
/// RFC 3339 values keep the wall-clock time of their own offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_local());
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

mod lenient {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let amount = match value {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(amount.filter(|value| value.is_finite()))
    }

    pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(text)) => super::parse_timestamp(&text),
            _ => None,
        })
    }
}

//! Plain-text rendering of day buckets for the list command.

use crate::{
    core::services::{RejectedExpense, SummaryService},
    currency::AmountFormatter,
    domain::{DayBucket, Displayable, Expense},
};

use super::output::{apply_style, MessageKind, OutputPreferences};

pub const EMPTY_LIST_MESSAGE: &str = "No expenses recorded.";

pub fn render_day_buckets(
    buckets: &[DayBucket],
    formatter: &dyn AmountFormatter,
    prefs: &OutputPreferences,
) -> String {
    if buckets.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let mut out = String::new();
    for bucket in buckets {
        let header = format!(
            "{} | {} | {}",
            bucket.label(),
            item_count(bucket.len()),
            formatter.format_amount(bucket.total)
        );
        out.push_str(&apply_style(MessageKind::Section, header, prefs));
        out.push('\n');
        for expense in &bucket.expenses {
            out.push_str(&render_row(expense, formatter));
            out.push('\n');
        }
    }
    let total = format!(
        "Total: {}",
        formatter.format_amount(SummaryService::grand_total(buckets))
    );
    out.push_str(&apply_style(MessageKind::Info, total, prefs));
    out.push('\n');
    out
}

pub fn render_row(expense: &Expense, formatter: &dyn AmountFormatter) -> String {
    let amount = expense
        .valid_amount()
        .map(|value| formatter.format_amount(value))
        .unwrap_or_else(|| "?".to_string());
    let mut row = format!("  [{}] {}  {}", expense.id, expense.display_label(), amount);
    if let Some(cat) = expense.cat.as_deref().filter(|cat| !cat.trim().is_empty()) {
        row.push_str(&format!("  ({})", cat.trim()));
    }
    row
}

pub fn render_rejections(rejected: &[RejectedExpense], prefs: &OutputPreferences) -> String {
    rejected
        .iter()
        .map(|entry| {
            let line = format!("skipped expense `{}`: {}", entry.expense.id, entry.error);
            format!("{}\n", apply_style(MessageKind::Warning, line, prefs))
        })
        .collect()
}

fn item_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

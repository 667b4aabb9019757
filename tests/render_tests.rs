mod common;

use common::sample_expenses;
use expense_core::{
    cli::{
        output::OutputPreferences,
        render::{render_day_buckets, render_rejections},
    },
    core::services::SummaryService,
    currency::{CurrencyCode, CurrencyFormatter, LocaleConfig, NegativeStyle},
    BucketOrder,
};
use insta::assert_snapshot;

#[test]
fn newest_first_listing() {
    let buckets = SummaryService::day_buckets(&sample_expenses(), BucketOrder::NewestFirst).unwrap();
    let rendered = render_day_buckets(
        &buckets,
        &CurrencyFormatter::default(),
        &OutputPreferences::plain(),
    );
    assert_snapshot!(rendered, @r###"
    === 01/02/24 | 1 item | $20.00 ===
      [3] Train  $20.00
    === 05/01/24 | 2 items | $15.50 ===
      [1] Groceries  $12.00  (Food)
      [2] Coffee  $3.50
    Total: $35.50
    "###);
}

#[test]
fn refunds_and_locale_separators() {
    let mut expenses = sample_expenses();
    expenses.push(common::expense("4", "Refund", -1250.0, "2024-02-01T12:00:00"));
    let buckets = SummaryService::day_buckets(&expenses, BucketOrder::OldestFirst).unwrap();
    let formatter = CurrencyFormatter::new(CurrencyCode::new("EUR"))
        .with_locale(LocaleConfig {
            decimal_separator: ',',
            grouping_separator: '.',
        })
        .with_negative_style(NegativeStyle::Parentheses);
    let rendered = render_day_buckets(&buckets, &formatter, &OutputPreferences::plain());
    assert_snapshot!(rendered, @r###"
    === 05/01/24 | 2 items | €15,50 ===
      [1] Groceries  €12,00  (Food)
      [2] Coffee  €3,50
    === 01/02/24 | 2 items | (€1.230,00) ===
      [3] Train  €20,00
      [4] Refund  (€1.250,00)
    Total: (€1.214,50)
    "###);
}

#[test]
fn rejected_records_render_as_warnings() {
    let mut expenses = sample_expenses();
    expenses[1].date = None;
    let report = SummaryService::day_buckets_lenient(&expenses, BucketOrder::NewestFirst).unwrap();
    let rendered = render_rejections(&report.rejected, &OutputPreferences::plain());
    assert_eq!(
        rendered,
        "WARNING: [!] skipped expense `2`: Expense `2` has a missing or invalid date\n"
    );
}

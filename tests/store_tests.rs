mod common;

use std::fs;

use common::{at, sample_expenses, test_dir};
use expense_core::{
    core::services::{ExpenseService, ServiceError, SummaryService},
    domain::{ExpenseUpdate, NewExpense},
    storage::{ExpenseSource, JsonFileSource},
    BucketOrder, ExpenseError,
};

#[test]
fn records_survive_reopen_in_source_order() {
    let path = test_dir().join("expenses.json");
    let mut store = JsonFileSource::open(&path).unwrap();
    for expense in sample_expenses() {
        store.insert(expense).unwrap();
    }

    let reopened = JsonFileSource::open(&path).unwrap();
    assert_eq!(reopened.list().unwrap(), sample_expenses());
}

#[test]
fn delete_is_visible_in_next_snapshot() {
    let path = test_dir().join("expenses.json");
    let mut store = JsonFileSource::open(&path).unwrap();
    for expense in sample_expenses() {
        store.insert(expense).unwrap();
    }

    let removed = ExpenseService::remove(&mut store, "2").unwrap();
    assert_eq!(removed.desc, "Coffee");

    let reopened = JsonFileSource::open(&path).unwrap();
    let buckets =
        SummaryService::day_buckets(&reopened.list().unwrap(), BucketOrder::Insertion).unwrap();
    assert_eq!(buckets[0].total, 12.0);
    assert_eq!(buckets[0].len(), 1);
}

#[test]
fn service_add_and_edit_persist() {
    let base = test_dir();
    let mut store = JsonFileSource::open_in(Some(base.clone())).unwrap();
    let created = ExpenseService::add(
        &mut store,
        NewExpense::new("Cinema", 9.0, at("2024-04-12T19:30:00")).with_category("Leisure"),
    )
    .unwrap();
    ExpenseService::edit(
        &mut store,
        &created.id,
        ExpenseUpdate {
            desc: Some("Cinema + popcorn".into()),
            amount: Some(14.5),
            ..ExpenseUpdate::default()
        },
    )
    .unwrap();

    let mut reopened = JsonFileSource::open(base.join("expenses.json")).unwrap();
    let stored = reopened.get(&created.id).unwrap();
    assert_eq!(stored.desc, "Cinema + popcorn");
    assert_eq!(stored.amount, Some(14.5));
    assert_eq!(stored.cat.as_deref(), Some("Leisure"));

    let err = ExpenseService::edit(
        &mut reopened,
        &created.id,
        ExpenseUpdate {
            desc: Some("  ".into()),
            ..ExpenseUpdate::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn corrupted_records_load_and_are_reported_by_id() {
    let path = test_dir().join("expenses.json");
    fs::write(
        &path,
        r#"{
  "schema_version": 1,
  "expenses": [
    { "id": "ok", "desc": "Bread", "amount": 2.2, "date": "2024-06-01T08:00:00" },
    { "id": "no-date", "desc": "Milk", "amount": 1.1, "date": "31/02/2024" },
    { "id": "no-amount", "desc": "Eggs", "amount": "lots", "date": "2024-06-01T09:00:00" }
  ]
}"#,
    )
    .unwrap();

    let store = JsonFileSource::open(&path).unwrap();
    let expenses = store.list().unwrap();
    assert_eq!(expenses.len(), 3);

    let err = SummaryService::day_buckets(&expenses, BucketOrder::NewestFirst).unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidDate { ref id } if id == "no-date"));

    let report = SummaryService::day_buckets_lenient(&expenses, BucketOrder::NewestFirst).unwrap();
    let rejected: Vec<_> = report
        .rejected
        .iter()
        .map(|r| r.expense.id.as_str())
        .collect();
    assert_eq!(rejected, vec!["no-date", "no-amount"]);
    assert_eq!(report.buckets.len(), 1);
    assert_eq!(report.buckets[0].total, 2.2);
}

#[test]
fn unreadable_document_is_a_storage_error() {
    let path = test_dir().join("expenses.json");
    fs::write(&path, "not json").unwrap();
    let err = JsonFileSource::open(&path).unwrap_err();
    assert!(matches!(err, ExpenseError::Storage(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let path = test_dir().join("expenses.json");
    let mut store = JsonFileSource::open(&path).unwrap();
    let first = sample_expenses().remove(0);
    store.insert(first.clone()).unwrap();
    let err = store.insert(first).unwrap_err();
    assert!(matches!(err, ExpenseError::DuplicateId(ref id) if id == "1"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn failed_save_leaves_snapshot_untouched() {
    let path = test_dir().join("expenses.json");
    let mut store = JsonFileSource::open(&path).unwrap();
    let mut expenses = sample_expenses();
    let third = expenses.pop().unwrap();
    for expense in expenses.clone() {
        store.insert(expense).unwrap();
    }

    // A directory in place of the staging file makes every write fail.
    let staging = path.with_extension("json.tmp");
    fs::create_dir(&staging).unwrap();

    let err = store.insert(third.clone()).unwrap_err();
    assert!(matches!(err, ExpenseError::Storage(_)));
    assert_eq!(store.list().unwrap(), expenses);

    assert!(store.delete("1").is_err());
    assert_eq!(store.list().unwrap(), expenses);

    let mut edited = expenses[0].clone();
    edited.desc = "Changed".into();
    assert!(store.update(edited).is_err());
    assert_eq!(store.list().unwrap(), expenses);

    fs::remove_dir(&staging).unwrap();
    store.insert(third).unwrap();
    assert_eq!(store.list().unwrap(), sample_expenses());
    assert_eq!(JsonFileSource::open(&path).unwrap().list().unwrap(), sample_expenses());
}

#[test]
fn reload_picks_up_external_writes() {
    let path = test_dir().join("expenses.json");
    let mut store = JsonFileSource::open(&path).unwrap();
    assert!(store.list().unwrap().is_empty());

    let mut other = JsonFileSource::open(&path).unwrap();
    for expense in sample_expenses() {
        other.insert(expense).unwrap();
    }
    assert!(store.list().unwrap().is_empty());

    store.reload().unwrap();
    assert_eq!(store.list().unwrap(), sample_expenses());

    fs::remove_file(&path).unwrap();
    store.reload().unwrap();
    assert!(store.list().unwrap().is_empty());
}

//! Day grouping of expense snapshots.

use std::{collections::HashMap, hash::Hash};

use crate::{
    domain::{BucketOrder, DayKey, Expense},
    errors::{ExpenseError, Result},
};

/// Partitions `items` by the key returned from `key_of`.
///
/// Groups appear in the first-seen order of their key and items keep their
/// relative input order within a group. The first key error aborts.
pub fn group_by_key<'a, T, K, E, F>(
    items: &'a [T],
    mut key_of: F,
) -> std::result::Result<Vec<(K, Vec<&'a T>)>, E>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> std::result::Result<K, E>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let key = key_of(item)?;
        let slot = match slots.get(&key) {
            Some(slot) => *slot,
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(item);
    }

    Ok(groups)
}

/// Day key of an expense, failing when its date is missing.
pub fn day_key(expense: &Expense) -> Result<DayKey> {
    expense
        .day()
        .map(DayKey::new)
        .ok_or_else(|| ExpenseError::InvalidDate {
            id: expense.id.clone(),
        })
}

/// Groups expenses by calendar day in first-seen day order.
pub fn group_by_day(expenses: &[Expense]) -> Result<Vec<(DayKey, Vec<&Expense>)>> {
    let groups = group_by_key(expenses, day_key)?;
    tracing::debug!(
        expenses = expenses.len(),
        days = groups.len(),
        "grouped expenses by day"
    );
    Ok(groups)
}

/// Reorders grouped entries by their day key.
pub fn sort_by_day<V>(groups: &mut [(DayKey, V)], order: BucketOrder) {
    match order {
        BucketOrder::NewestFirst => groups.sort_by(|a, b| b.0.cmp(&a.0)),
        BucketOrder::OldestFirst => groups.sort_by(|a, b| a.0.cmp(&b.0)),
        BucketOrder::Insertion => {}
    }
}

use crate::{
    core::{
        aggregation::{amount_of, sum_amounts},
        grouping::{day_key, group_by_day, sort_by_day},
    },
    domain::{BucketOrder, DayBucket, Expense},
    errors::{ExpenseError, Result},
};

/// Record left out of a lenient summary together with the reason.
#[derive(Debug)]
pub struct RejectedExpense {
    pub expense: Expense,
    pub error: ExpenseError,
}

/// Buckets built from the valid part of a snapshot.
#[derive(Debug, Default)]
pub struct DayBucketReport {
    pub buckets: Vec<DayBucket>,
    pub rejected: Vec<RejectedExpense>,
}

impl DayBucketReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Groups a snapshot by day, totals each day and orders the result.
    ///
    /// Fails on the first expense with an invalid date or amount.
    pub fn day_buckets(expenses: &[Expense], order: BucketOrder) -> Result<Vec<DayBucket>> {
        let mut groups = group_by_day(expenses)?;
        sort_by_day(&mut groups, order);
        groups
            .into_iter()
            .map(|(key, members)| {
                let total = sum_amounts(members.iter().copied())?;
                Ok(DayBucket {
                    key,
                    expenses: members.into_iter().cloned().collect(),
                    total,
                })
            })
            .collect()
    }

    /// Same as [`SummaryService::day_buckets`] but skips invalid records.
    pub fn day_buckets_lenient(
        expenses: &[Expense],
        order: BucketOrder,
    ) -> Result<DayBucketReport> {
        let mut valid = Vec::with_capacity(expenses.len());
        let mut rejected = Vec::new();
        for expense in expenses {
            match validate(expense) {
                Ok(()) => valid.push(expense.clone()),
                Err(error) => {
                    tracing::warn!(id = %expense.id, %error, "skipping invalid expense");
                    rejected.push(RejectedExpense {
                        expense: expense.clone(),
                        error,
                    });
                }
            }
        }
        let buckets = Self::day_buckets(&valid, order)?;
        Ok(DayBucketReport { buckets, rejected })
    }

    pub fn grand_total(buckets: &[DayBucket]) -> f64 {
        buckets.iter().map(|bucket| bucket.total).sum()
    }
}

fn validate(expense: &Expense) -> Result<()> {
    day_key(expense)?;
    amount_of(expense)?;
    Ok(())
}

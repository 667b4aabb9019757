//! Summation of expense amounts.

use serde::Serialize;

use crate::{
    core::grouping::group_by_key,
    domain::Expense,
    errors::{ExpenseError, Result},
};

/// Total of one category within a set of expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    pub total: f64,
}

/// Amount of an expense, failing when it is missing or not finite.
pub fn amount_of(expense: &Expense) -> Result<f64> {
    expense
        .valid_amount()
        .ok_or_else(|| ExpenseError::InvalidAmount {
            id: expense.id.clone(),
        })
}

/// Sums the amounts of `expenses` with no rounding; an empty input totals `0.0`.
///
/// Negative amounts are added as-is so refunds offset spending.
pub fn sum_amounts<'a, I>(expenses: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .try_fold(0.0, |total, expense| Ok(total + amount_of(expense)?))
}

/// Per-category totals in first-seen category order.
pub fn totals_by_category(expenses: &[Expense]) -> Result<Vec<CategoryTotal>> {
    let groups = group_by_key(expenses, |expense| {
        Ok::<_, ExpenseError>(expense.category_label().to_string())
    })?;
    groups
        .into_iter()
        .map(|(category, members)| {
            Ok(CategoryTotal {
                category,
                count: members.len(),
                total: sum_amounts(members)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_sum_is_zero() {
        let none: Vec<Expense> = Vec::new();
        assert_eq!(sum_amounts(&none).unwrap(), 0.0);
    }

    #[test]
    fn sums_fractional_amounts() {
        let expenses = vec![
            Expense::with_id("1", "a", 10.0, at(1)),
            Expense::with_id("2", "b", 5.5, at(1)),
        ];
        assert_eq!(sum_amounts(&expenses).unwrap(), 15.5);
    }

    #[test]
    fn refunds_reduce_the_total() {
        let expenses = vec![
            Expense::with_id("1", "Shoes", 80.0, at(2)),
            Expense::with_id("2", "Refund", -30.0, at(2)),
        ];
        assert_eq!(sum_amounts(&expenses).unwrap(), 50.0);
    }

    #[test]
    fn missing_amount_is_a_fault_not_zero() {
        let mut broken = Expense::with_id("x", "Mystery", 1.0, at(3));
        broken.amount = None;
        let expenses = vec![Expense::with_id("1", "a", 10.0, at(3)), broken];
        let err = sum_amounts(&expenses).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount { ref id } if id == "x"));
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        let mut broken = Expense::with_id("nan", "Glitch", 1.0, at(3));
        broken.amount = Some(f64::NAN);
        assert!(sum_amounts([&broken]).is_err());
    }

    #[test]
    fn category_totals_follow_first_seen_order() {
        let expenses = vec![
            Expense::with_id("1", "Lunch", 12.0, at(4)).with_category("Food"),
            Expense::with_id("2", "Bus", 2.5, at(4)),
            Expense::with_id("3", "Dinner", 20.0, at(5)).with_category("Food"),
        ];
        let totals = totals_by_category(&expenses).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[0].total, 32.0);
        assert_eq!(totals[1].category, "Uncategorized");
        assert_eq!(totals[1].total, 2.5);
    }
}

use uuid::Uuid;

use crate::{
    domain::{Expense, ExpenseUpdate, NewExpense},
    storage::ExpenseSource,
};

use super::{ServiceError, ServiceResult};

/// Validated create/edit/delete operations over an expense source.
pub struct ExpenseService;

impl ExpenseService {
    pub fn add<S: ExpenseSource + ?Sized>(
        source: &mut S,
        input: NewExpense,
    ) -> ServiceResult<Expense> {
        let desc = validate_desc(&input.desc)?;
        validate_amount(input.amount)?;
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            desc,
            amount: Some(input.amount),
            date: Some(input.date),
            cat: normalize_category(input.cat),
        };
        source.insert(expense.clone())?;
        Ok(expense)
    }

    pub fn edit<S: ExpenseSource + ?Sized>(
        source: &mut S,
        id: &str,
        update: ExpenseUpdate,
    ) -> ServiceResult<Expense> {
        let mut expense = source.get(id)?;
        if let Some(desc) = update.desc {
            expense.desc = validate_desc(&desc)?;
        }
        if let Some(amount) = update.amount {
            validate_amount(amount)?;
            expense.amount = Some(amount);
        }
        if let Some(date) = update.date {
            expense.date = Some(date);
        }
        if let Some(cat) = update.cat {
            expense.cat = normalize_category(cat);
        }
        source.update(expense.clone())?;
        Ok(expense)
    }

    pub fn remove<S: ExpenseSource + ?Sized>(source: &mut S, id: &str) -> ServiceResult<Expense> {
        Ok(source.delete(id)?)
    }
}

fn validate_desc(desc: &str) -> ServiceResult<String> {
    let trimmed = desc.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(
            "expense description cannot be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: f64) -> ServiceResult<()> {
    if !amount.is_finite() {
        return Err(ServiceError::Invalid(format!(
            "expense amount must be a finite number (got {})",
            amount
        )));
    }
    Ok(())
}

fn normalize_category(cat: Option<String>) -> Option<String> {
    cat.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

use crate::{domain::Expense, errors::Result};

use super::{ensure_unique, position_of, ExpenseSource};

/// Vector-backed source that preserves insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    expenses: Vec<Expense>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl ExpenseSource for InMemorySource {
    fn list(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn insert(&mut self, expense: Expense) -> Result<()> {
        ensure_unique(&self.expenses, &expense.id)?;
        self.expenses.push(expense);
        Ok(())
    }

    fn update(&mut self, expense: Expense) -> Result<()> {
        let idx = position_of(&self.expenses, &expense.id)?;
        self.expenses[idx] = expense;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<Expense> {
        let idx = position_of(&self.expenses, id)?;
        Ok(self.expenses.remove(idx))
    }
}

//! Pure query and statistics helpers over expense records.
//!
//! Filter selection (month, category) is passed in explicitly; nothing here
//! holds state between calls.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::expense::{Category, Expense};

/// A calendar month within a year, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    fn contains(&self, date: chrono::NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Filter criteria for an expense listing. `None` means "all".
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    pub month: Option<YearMonth>,
    pub category: Option<Category>,
}

/// Select the expenses matching the filter, preserving input order.
///
/// Expenses without a date are excluded whenever a month filter is set.
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| match filter.category {
            Some(category) => e.category == category,
            None => true,
        })
        .filter(|e| match filter.month {
            Some(month) => e.expense_date.is_some_and(|d| month.contains(d)),
            None => true,
        })
        .collect()
}

/// Sum of the given expenses.
pub fn total_spent<'a, I>(expenses: I) -> Decimal
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Per-category totals in [`Category::ALL`] order. Categories without
/// expenses are included with a zero total so chart feeds stay aligned.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<(Category, Decimal)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let total = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            (category, total)
        })
        .collect()
}

/// Per-month totals for one year, January first. Undated expenses are not
/// counted.
pub fn monthly_totals(expenses: &[Expense], year: i32) -> [Decimal; 12] {
    let mut totals = [Decimal::ZERO; 12];
    for expense in expenses {
        if let Some(date) = expense.expense_date {
            if date.year() == year {
                totals[date.month0() as usize] += expense.amount;
            }
        }
    }
    totals
}

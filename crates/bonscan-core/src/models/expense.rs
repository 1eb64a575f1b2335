//! Expense record and category models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BonscanError;
use crate::receipt::ScanResult;

/// Spending category. A closed set; `Other` is both a real category and the
/// classifier's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Health,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = BonscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "shopping" => Ok(Category::Shopping),
            "health" => Ok(Category::Health),
            "other" => Ok(Category::Other),
            _ => Err(BonscanError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single expense record as handed to persistence.
///
/// The owning-user identity and remote document id live in the persistence
/// layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent, non-negative.
    pub amount: Decimal,

    /// Spending category.
    pub category: Category,

    /// Date of the expense. May be unknown when OCR found no date and the
    /// user did not supply one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(amount: Decimal, category: Category, expense_date: Option<NaiveDate>) -> Self {
        Self {
            amount,
            category,
            expense_date,
            created_at: Utc::now(),
        }
    }

    /// Build an expense from a scan result.
    ///
    /// Returns `None` when the scan found no amount: a receipt without a
    /// usable amount is not a savable expense. An absent date is carried
    /// through for the user to fill in.
    pub fn from_scan(scan: &ScanResult) -> Option<Self> {
        let amount = scan.amount?;
        Some(Self::new(amount, scan.category, scan.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let parsed = Category::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_unknown_label() {
        let err = Category::from_str("groceries").unwrap_err();
        assert!(matches!(err, BonscanError::UnknownCategory(_)));
    }

    #[test]
    fn test_from_scan_requires_amount() {
        let scan = ScanResult {
            amount: None,
            date: NaiveDate::from_ymd_opt(2025, 7, 23),
            category: Category::Food,
        };
        assert!(Expense::from_scan(&scan).is_none());

        let scan = ScanResult {
            amount: Some(Decimal::from_str("12.99").unwrap()),
            date: None,
            category: Category::Food,
        };
        let expense = Expense::from_scan(&scan).unwrap();
        assert_eq!(expense.amount, Decimal::from_str("12.99").unwrap());
        assert!(expense.expense_date.is_none());
    }
}

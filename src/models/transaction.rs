use rust_decimal::Decimal;

use super::Category;

/// A single dated expense. Amounts are never negative.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    /// Free-form date label, usually "YYYY-MM-DD".
    pub(crate) date: String,
    pub(crate) category: Category,
    pub(crate) amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(date: impl Into<String>, category: Category, amount: Decimal) -> Self {
        Self {
            date: date.into(),
            category,
            amount: amount.max(Decimal::ZERO),
        }
    }

    /// Expense dated today, used for entries typed into the dashboard.
    pub(crate) fn today(category: Category, amount: Decimal) -> Self {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self::new(date, category, amount)
    }
}

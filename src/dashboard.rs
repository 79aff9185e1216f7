use rust_decimal::Decimal;

use crate::advice::{Advice, AdviceInput, Advisor};
use crate::config::{Config, ForecastConfig};
use crate::input::{coerce_amount, coerce_non_negative};
use crate::metrics::Metrics;
use crate::models::{BudgetState, Category, Transaction};
use crate::store::TransactionStore;

/// Result of a savings top-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SavingsOutcome {
    Added {
        amount: Decimal,
        saved: Decimal,
    },
    /// Remaining budget was below the increment; nothing changed.
    Rejected {
        remaining: Decimal,
        required: Decimal,
    },
}

impl SavingsOutcome {
    pub(crate) fn notice(&self) -> String {
        match self {
            Self::Added { amount, saved } => {
                format!("Added ${amount} to savings (saved: ${saved})")
            }
            Self::Rejected { required, .. } => {
                format!("Not enough remaining budget to add ${required} to savings.")
            }
        }
    }
}

/// Owns the single mutable state of the app and hands out derived values.
pub(crate) struct Dashboard {
    store: TransactionStore,
    budget: BudgetState,
    forecast: ForecastConfig,
    advisor: Advisor,
}

impl Dashboard {
    pub(crate) fn new(seed: Vec<Transaction>, config: Config) -> Self {
        tracing::info!(
            transactions = seed.len(),
            income = %config.budget.income,
            goal = %config.budget.savings_goal,
            "dashboard initialised"
        );
        Self {
            store: TransactionStore::new(seed),
            budget: config.budget,
            forecast: config.forecast,
            advisor: Advisor::new(config.advice),
        }
    }

    // ── Mutations ─────────────────────────────────────────────

    pub(crate) fn set_income(&mut self, value: &str) -> Decimal {
        self.budget.income = coerce_amount(value);
        tracing::info!(income = %self.budget.income, "income set");
        self.budget.income
    }

    pub(crate) fn set_savings_goal(&mut self, value: &str) -> Decimal {
        self.budget.savings_goal = coerce_non_negative(value);
        tracing::info!(goal = %self.budget.savings_goal, "savings goal set");
        self.budget.savings_goal
    }

    /// Record an expense dated today. Bad or negative amounts become zero.
    pub(crate) fn add_expense(&mut self, category: Category, amount: &str) -> &Transaction {
        let txn = Transaction::today(category, coerce_non_negative(amount));
        tracing::info!(category = %txn.category, amount = %txn.amount, "expense added");
        self.store.append(txn);
        let idx = self.store.len() - 1;
        &self.store.transactions()[idx]
    }

    /// Move one fixed increment into savings if the remaining budget covers it.
    pub(crate) fn add_to_savings(&mut self) -> SavingsOutcome {
        let required = self.forecast.savings_increment;
        let remaining = self.metrics().remaining_budget;
        if remaining < required {
            tracing::warn!(%remaining, %required, "savings top-up rejected");
            return SavingsOutcome::Rejected {
                remaining,
                required,
            };
        }
        self.budget.saved_amount = self.budget.saved_amount.saturating_add(required);
        tracing::info!(saved = %self.budget.saved_amount, "savings top-up");
        SavingsOutcome::Added {
            amount: required,
            saved: self.budget.saved_amount,
        }
    }

    // ── Read-only views ───────────────────────────────────────

    pub(crate) fn budget(&self) -> &BudgetState {
        &self.budget
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub(crate) fn savings_increment(&self) -> Decimal {
        self.forecast.savings_increment
    }

    pub(crate) fn metrics(&self) -> Metrics {
        Metrics::compute(self.store.transactions(), &self.budget, &self.forecast)
    }

    pub(crate) fn advice(&self) -> Vec<Advice> {
        let metrics = self.metrics();
        self.advisor.advise(&AdviceInput::new(&metrics, &self.budget))
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;

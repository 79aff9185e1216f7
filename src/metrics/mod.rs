//! Pure aggregation over the transaction list and budget inputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::ForecastConfig;
use crate::models::{BudgetState, Category, Transaction};

/// Per-category sums, one entry per category in `Category::all()` order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotals(Vec<(Category, Decimal)>);

impl CategoryTotals {
    #[cfg(test)]
    pub(crate) fn get(&self, category: Category) -> Decimal {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| *v)
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &(Category, Decimal)> {
        self.0.iter()
    }

    pub(crate) fn sum(&self) -> Decimal {
        self.0
            .iter()
            .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(*v))
    }

    /// Largest bucket; on a tie the earlier category wins.
    pub(crate) fn highest(&self) -> Option<(Category, Decimal)> {
        let mut best: Option<(Category, Decimal)> = None;
        for &(c, v) in &self.0 {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((c, v)),
            }
        }
        best
    }
}

/// How long until the savings goal is reached at the estimated pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoalForecast {
    Reached,
    Months(u32),
    Unreachable,
}

impl std::fmt::Display for GoalForecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reached => write!(f, "Goal reached"),
            Self::Months(1) => write!(f, "1 month"),
            Self::Months(n) => write!(f, "{n} months"),
            Self::Unreachable => write!(f, "Unreachable"),
        }
    }
}

/// Everything the dashboard shows, derived fresh on every read.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Metrics {
    pub(crate) total_expenses: Decimal,
    pub(crate) remaining_budget: Decimal,
    pub(crate) category_totals: CategoryTotals,
    pub(crate) savings_progress_percent: Decimal,
    pub(crate) monthly_savings_estimate: Decimal,
    pub(crate) months_to_goal: GoalForecast,
}

impl Metrics {
    pub(crate) fn compute(
        transactions: &[Transaction],
        budget: &BudgetState,
        forecast: &ForecastConfig,
    ) -> Self {
        let total_expenses = total_expenses(transactions);
        let remaining_budget = remaining_budget(budget.income, total_expenses);
        let monthly_savings_estimate =
            monthly_savings_estimate(remaining_budget, forecast.savings_rate);
        let category_totals = category_totals(transactions);
        debug_assert_eq!(category_totals.sum(), total_expenses);

        Self {
            total_expenses,
            remaining_budget,
            category_totals,
            savings_progress_percent: savings_progress_percent(
                budget.saved_amount,
                budget.savings_goal,
            ),
            monthly_savings_estimate,
            months_to_goal: months_to_goal(budget, monthly_savings_estimate),
        }
    }
}

// Money arithmetic saturates at the `Decimal` bounds instead of panicking;
// form input accepts any representable amount.

pub(crate) fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

/// May go negative; overspending is shown as-is.
pub(crate) fn remaining_budget(income: Decimal, total_expenses: Decimal) -> Decimal {
    income.saturating_sub(total_expenses)
}

pub(crate) fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals: Vec<(Category, Decimal)> = Category::all()
        .iter()
        .map(|c| (*c, Decimal::ZERO))
        .collect();
    for txn in transactions {
        if let Some((_, sum)) = totals.iter_mut().find(|(c, _)| *c == txn.category) {
            *sum = sum.saturating_add(txn.amount);
        }
    }
    CategoryTotals(totals)
}

/// `saved / goal * 100`, or zero when there is no goal. A ratio too large
/// to represent reads as `Decimal::MAX`.
pub(crate) fn savings_progress_percent(saved: Decimal, goal: Decimal) -> Decimal {
    if goal.is_zero() {
        return Decimal::ZERO;
    }
    saved
        .checked_div(goal)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

pub(crate) fn monthly_savings_estimate(remaining_budget: Decimal, savings_rate: Decimal) -> Decimal {
    if remaining_budget > Decimal::ZERO {
        remaining_budget.saturating_mul(savings_rate)
    } else {
        Decimal::ZERO
    }
}

/// `Unreachable` only when nothing is being saved. A positive pace always
/// yields a month count, saturating at `u32::MAX`.
pub(crate) fn months_to_goal(budget: &BudgetState, monthly_estimate: Decimal) -> GoalForecast {
    if budget.goal_met() {
        return GoalForecast::Reached;
    }
    if monthly_estimate <= Decimal::ZERO {
        return GoalForecast::Unreachable;
    }
    let months = budget
        .shortfall()
        .checked_div(monthly_estimate)
        .and_then(|m| m.ceil().to_u32())
        .unwrap_or(u32::MAX);
    GoalForecast::Months(months)
}

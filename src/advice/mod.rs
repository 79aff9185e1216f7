//! Rule-based advice over the computed metrics.
//!
//! Rules run in order and each one may append a single message. The first
//! rule always answers, so every evaluation carries exactly one budget
//! health verdict.

use rust_decimal::Decimal;

use crate::config::AdviceConfig;
use crate::metrics::{CategoryTotals, Metrics};
use crate::models::BudgetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdviceKind {
    OverspendWarning,
    SavingsPraise,
    SavingsReminder,
    CategoryConcentration,
    GoalShortfall,
}

impl AdviceKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::OverspendWarning => "Overspending",
            Self::SavingsPraise => "Well done",
            Self::SavingsReminder => "Reminder",
            Self::CategoryConcentration => "Category",
            Self::GoalShortfall => "Goal",
        }
    }

    pub(crate) fn is_warning(&self) -> bool {
        matches!(self, Self::OverspendWarning | Self::CategoryConcentration)
    }
}

impl std::fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Advice {
    pub(crate) kind: AdviceKind,
    pub(crate) message: String,
}

impl Advice {
    fn new(kind: AdviceKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// The aggregate figures the rules look at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdviceInput<'a> {
    pub(crate) total_expenses: Decimal,
    pub(crate) remaining_budget: Decimal,
    pub(crate) income: Decimal,
    pub(crate) category_totals: &'a CategoryTotals,
    pub(crate) saved_amount: Decimal,
    pub(crate) savings_goal: Decimal,
}

impl<'a> AdviceInput<'a> {
    pub(crate) fn new(metrics: &'a Metrics, budget: &BudgetState) -> Self {
        Self {
            total_expenses: metrics.total_expenses,
            remaining_budget: metrics.remaining_budget,
            income: budget.income,
            category_totals: &metrics.category_totals,
            saved_amount: budget.saved_amount,
            savings_goal: budget.savings_goal,
        }
    }
}

type RuleFn = fn(&AdviceInput<'_>, &AdviceConfig) -> Option<Advice>;

struct AdviceRule {
    name: &'static str,
    evaluate: RuleFn,
}

const DEFAULT_RULES: &[AdviceRule] = &[
    AdviceRule {
        name: "budget-health",
        evaluate: budget_health,
    },
    AdviceRule {
        name: "category-concentration",
        evaluate: category_concentration,
    },
    AdviceRule {
        name: "goal-shortfall",
        evaluate: goal_shortfall,
    },
];

pub(crate) struct Advisor {
    rules: &'static [AdviceRule],
    config: AdviceConfig,
}

impl Advisor {
    pub(crate) fn new(config: AdviceConfig) -> Self {
        Self {
            rules: DEFAULT_RULES,
            config,
        }
    }

    pub(crate) fn advise(&self, input: &AdviceInput<'_>) -> Vec<Advice> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let advice = (rule.evaluate)(input, &self.config);
                if let Some(ref a) = advice {
                    tracing::trace!(rule = rule.name, kind = %a.kind, "rule fired");
                }
                advice
            })
            .collect()
    }
}

fn budget_health(input: &AdviceInput<'_>, config: &AdviceConfig) -> Option<Advice> {
    let advice = if input.total_expenses > input.income {
        Advice::new(
            AdviceKind::OverspendWarning,
            format!(
                "You are spending more than you earn: expenses of ${} exceed income of ${}. Consider cutting back.",
                plain(input.total_expenses),
                plain(input.income)
            ),
        )
    } else if input.remaining_budget > config.praise_ratio * input.income {
        Advice::new(
            AdviceKind::SavingsPraise,
            format!(
                "Great job! ${} is left over, more than {}% of your income.",
                plain(input.remaining_budget),
                percent(config.praise_ratio)
            ),
        )
    } else {
        Advice::new(
            AdviceKind::SavingsReminder,
            format!(
                "Only ${} is left this period. Try to keep at least {}% of your income unspent.",
                plain(input.remaining_budget),
                percent(config.praise_ratio)
            ),
        )
    };
    Some(advice)
}

fn category_concentration(input: &AdviceInput<'_>, config: &AdviceConfig) -> Option<Advice> {
    let (category, amount) = input.category_totals.highest()?;
    if amount <= config.concentration_ratio * input.income {
        return None;
    }
    Some(Advice::new(
        AdviceKind::CategoryConcentration,
        format!(
            "Spending on {category} (${}) is over {}% of your income. Consider reducing it.",
            plain(amount),
            percent(config.concentration_ratio)
        ),
    ))
}

fn goal_shortfall(input: &AdviceInput<'_>, _config: &AdviceConfig) -> Option<Advice> {
    if input.saved_amount >= input.savings_goal {
        return None;
    }
    Some(Advice::new(
        AdviceKind::GoalShortfall,
        format!(
            "You need ${} more to reach your savings goal of ${}.",
            plain(input.savings_goal - input.saved_amount),
            plain(input.savings_goal)
        ),
    ))
}

/// Cents precision without trailing zeros: 4000.00 -> "4000".
fn plain(v: Decimal) -> String {
    v.round_dp(2).normalize().to_string()
}

fn percent(ratio: Decimal) -> String {
    plain(ratio * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests;

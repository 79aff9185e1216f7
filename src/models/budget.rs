use rust_decimal::Decimal;

/// Scalar inputs the user controls directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BudgetState {
    pub(crate) income: Decimal,
    pub(crate) savings_goal: Decimal,
    pub(crate) saved_amount: Decimal,
}

impl BudgetState {
    pub(crate) fn new(income: Decimal, savings_goal: Decimal, saved_amount: Decimal) -> Self {
        Self {
            income,
            savings_goal,
            saved_amount,
        }
    }

    pub(crate) fn goal_met(&self) -> bool {
        self.saved_amount >= self.savings_goal
    }

    /// Amount still missing from the goal, never negative.
    pub(crate) fn shortfall(&self) -> Decimal {
        (self.savings_goal - self.saved_amount).max(Decimal::ZERO)
    }
}

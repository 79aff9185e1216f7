#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::advice::AdviceKind;
use crate::import::sample_transactions;
use crate::metrics::GoalForecast;

fn sample_dashboard(income: Decimal, goal: Decimal, saved: Decimal) -> Dashboard {
    let config = Config {
        budget: BudgetState::new(income, goal, saved),
        ..Config::default()
    };
    Dashboard::new(sample_transactions().unwrap(), config)
}

fn empty_dashboard() -> Dashboard {
    Dashboard::new(Vec::new(), Config::default())
}

// ── setters ───────────────────────────────────────────────────

#[test]
fn test_set_income_parses() {
    let mut d = empty_dashboard();
    assert_eq!(d.set_income("12,000"), dec!(12000));
    assert_eq!(d.budget().income, dec!(12000));
}

#[test]
fn test_set_income_garbage_is_zero() {
    let mut d = sample_dashboard(dec!(5000), dec!(0), dec!(0));
    assert_eq!(d.set_income("lots"), Decimal::ZERO);
    assert_eq!(d.metrics().remaining_budget, dec!(-3325));
}

#[test]
fn test_set_savings_goal() {
    let mut d = empty_dashboard();
    d.set_savings_goal("4500");
    assert_eq!(d.budget().savings_goal, dec!(4500));
    d.set_savings_goal("nope");
    assert_eq!(d.budget().savings_goal, Decimal::ZERO);
}

#[test]
fn test_add_expense_appends() {
    let mut d = empty_dashboard();
    d.set_income("1000");
    let txn = d.add_expense(Category::Food, "25.50");
    assert_eq!(txn.amount, dec!(25.50));
    assert_eq!(d.transactions().len(), 1);
    assert_eq!(d.metrics().total_expenses, dec!(25.50));
    assert_eq!(d.metrics().remaining_budget, dec!(974.50));
}

#[test]
fn test_add_expense_bad_amount_is_zero() {
    let mut d = empty_dashboard();
    let txn = d.add_expense(Category::Travel, "abc");
    assert_eq!(txn.amount, Decimal::ZERO);
    let txn = d.add_expense(Category::Travel, "-40");
    assert_eq!(txn.amount, Decimal::ZERO);
    assert_eq!(d.transactions().len(), 2);
}

// ── add_to_savings ────────────────────────────────────────────

#[test]
fn test_add_to_savings_accepted() {
    let mut d = sample_dashboard(dec!(12000), dec!(4500), dec!(500));
    let outcome = d.add_to_savings();
    assert_eq!(
        outcome,
        SavingsOutcome::Added {
            amount: dec!(100),
            saved: dec!(600),
        }
    );
    assert_eq!(d.budget().saved_amount, dec!(600));
}

#[test]
fn test_add_to_savings_rejected_low_budget() {
    let mut d = empty_dashboard();
    d.set_income("50");
    d.budget.saved_amount = dec!(10);
    let outcome = d.add_to_savings();
    assert!(matches!(outcome, SavingsOutcome::Rejected { .. }));
    assert_eq!(d.budget().saved_amount, dec!(10));
    assert!(outcome.notice().contains("Not enough remaining budget"));
}

#[test]
fn test_add_to_savings_exact_threshold_allowed() {
    let mut d = empty_dashboard();
    d.set_income("100");
    assert!(matches!(d.add_to_savings(), SavingsOutcome::Added { .. }));
}

#[test]
fn test_add_to_savings_uses_configured_increment() {
    let mut config = Config::default();
    config.budget.income = dec!(1000);
    config.forecast.savings_increment = dec!(250);
    let mut d = Dashboard::new(Vec::new(), config);
    d.add_to_savings();
    assert_eq!(d.budget().saved_amount, dec!(250));
    assert_eq!(d.savings_increment(), dec!(250));
}

// ── derived values ────────────────────────────────────────────

#[test]
fn test_sample_scenario_metrics() {
    let d = sample_dashboard(dec!(12000), dec!(4500), dec!(500));
    let m = d.metrics();
    assert_eq!(m.total_expenses, dec!(3325));
    assert_eq!(m.remaining_budget, dec!(8675));
    assert_eq!(m.category_totals.get(Category::Food), dec!(155));
    assert_eq!(m.category_totals.get(Category::Rent), dec!(2000));
    assert_eq!(m.category_totals.get(Category::Travel), dec!(600));
    assert_eq!(m.category_totals.get(Category::Utilities), dec!(270));
    assert_eq!(m.category_totals.get(Category::Other), dec!(300));
    assert_eq!(m.months_to_goal, GoalForecast::Months(2));
}

#[test]
fn test_sample_scenario_advice() {
    let d = sample_dashboard(dec!(12000), dec!(4500), dec!(500));
    let advice = d.advice();
    assert_eq!(advice[0].kind, AdviceKind::SavingsPraise);
    let shortfall = advice
        .iter()
        .find(|a| a.kind == AdviceKind::GoalShortfall)
        .unwrap();
    assert!(shortfall.message.contains("4000"));
}

#[test]
fn test_metrics_track_mutations() {
    let mut d = empty_dashboard();
    d.set_income("1000");
    d.add_expense(Category::Rent, "900");
    assert_eq!(d.advice()[0].kind, AdviceKind::SavingsReminder);
    d.add_expense(Category::Food, "200");
    assert_eq!(d.advice()[0].kind, AdviceKind::OverspendWarning);
}

// ── extreme input ─────────────────────────────────────────────

#[test]
fn test_tiny_goal_does_not_overflow_progress() {
    let mut d = sample_dashboard(dec!(12000), dec!(0), dec!(100));
    d.set_savings_goal("0.0000000000000000000000000001");
    let m = d.metrics();
    assert_eq!(m.savings_progress_percent, Decimal::MAX);
    assert_eq!(m.months_to_goal, GoalForecast::Reached);
}

#[test]
fn test_tiny_income_gives_saturated_forecast() {
    let mut d = empty_dashboard();
    d.set_income("0.000000000000000000000000001");
    d.set_savings_goal("1000000");
    assert_eq!(d.metrics().months_to_goal, GoalForecast::Months(u32::MAX));
}

#[test]
fn test_huge_negative_income_saturates_remaining() {
    let mut d = sample_dashboard(dec!(0), dec!(0), dec!(0));
    d.set_income("-79228162514264337593543950335");
    assert_eq!(d.metrics().remaining_budget, Decimal::MIN);
    assert_eq!(d.advice()[0].kind, AdviceKind::OverspendWarning);
}

#[test]
fn test_huge_expenses_saturate_total() {
    let mut d = empty_dashboard();
    d.add_expense(Category::Food, "79228162514264337593543950335");
    d.add_expense(Category::Food, "79228162514264337593543950335");
    let m = d.metrics();
    assert_eq!(m.total_expenses, Decimal::MAX);
    assert_eq!(m.category_totals.get(Category::Food), Decimal::MAX);
    assert_eq!(d.advice()[0].kind, AdviceKind::OverspendWarning);
}

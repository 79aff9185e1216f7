#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::config::ForecastConfig;
use crate::metrics::category_totals;
use crate::models::{Category, Transaction};

fn totals(entries: &[(Category, Decimal)]) -> CategoryTotals {
    let txns: Vec<Transaction> = entries
        .iter()
        .map(|(c, a)| Transaction::new("2024-01-01", *c, *a))
        .collect();
    category_totals(&txns)
}

fn input<'a>(
    income: Decimal,
    totals: &'a CategoryTotals,
    saved: Decimal,
    goal: Decimal,
) -> AdviceInput<'a> {
    let total = totals.sum();
    AdviceInput {
        total_expenses: total,
        remaining_budget: income - total,
        income,
        category_totals: totals,
        saved_amount: saved,
        savings_goal: goal,
    }
}

fn kinds(advice: &[Advice]) -> Vec<AdviceKind> {
    advice.iter().map(|a| a.kind).collect()
}

fn health_count(advice: &[Advice]) -> usize {
    advice
        .iter()
        .filter(|a| {
            matches!(
                a.kind,
                AdviceKind::OverspendWarning | AdviceKind::SavingsPraise | AdviceKind::SavingsReminder
            )
        })
        .count()
}

// ── budget health ─────────────────────────────────────────────

#[test]
fn test_overspend_warning() {
    let t = totals(&[(Category::Rent, dec!(1500))]);
    let a = budget_health(&input(dec!(1000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::OverspendWarning);
    assert!(a.message.contains("1500"));
}

#[test]
fn test_savings_praise_sample_scenario() {
    let t = totals(&[(Category::Food, dec!(3325))]);
    let i = input(dec!(12000), &t, dec!(0), dec!(0));
    assert_eq!(i.remaining_budget, dec!(8675));
    let a = budget_health(&i, &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::SavingsPraise);
    assert!(a.message.contains("20%"));
}

#[test]
fn test_savings_reminder_when_margin_thin() {
    let t = totals(&[(Category::Food, dec!(900))]);
    let a = budget_health(&input(dec!(1000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::SavingsReminder);
}

#[test]
fn test_exactly_at_praise_threshold_is_reminder() {
    // remaining 200 == 0.2 * 1000, not strictly greater
    let t = totals(&[(Category::Food, dec!(800))]);
    let a = budget_health(&input(dec!(1000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::SavingsReminder);
}

#[test]
fn test_expenses_equal_income_is_not_overspend() {
    let t = totals(&[(Category::Food, dec!(1000))]);
    let a = budget_health(&input(dec!(1000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::SavingsReminder);
}

#[test]
fn test_zero_everything_is_reminder() {
    let t = totals(&[]);
    let a = budget_health(&input(dec!(0), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::SavingsReminder);
}

#[test]
fn test_exactly_one_health_verdict() {
    let advisor = Advisor::new(AdviceConfig::default());
    let cases = [
        (dec!(0), dec!(0)),
        (dec!(100), dec!(500)),
        (dec!(1000), dec!(900)),
        (dec!(12000), dec!(3325)),
        (dec!(-50), dec!(0)),
    ];
    for (income, spent) in cases {
        let t = totals(&[(Category::Other, spent)]);
        let advice = advisor.advise(&input(income, &t, dec!(0), dec!(100)));
        assert_eq!(health_count(&advice), 1, "income={income} spent={spent}");
    }
}

// ── category concentration ────────────────────────────────────

#[test]
fn test_concentration_names_category() {
    let t = totals(&[(Category::Rent, dec!(4000)), (Category::Food, dec!(100))]);
    let a = category_concentration(&input(dec!(10000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::CategoryConcentration);
    assert!(a.message.contains("Rent"));
    assert!(a.message.contains("4000"));
}

#[test]
fn test_concentration_not_triggered_below_ratio() {
    let t = totals(&[(Category::Rent, dec!(2000))]);
    assert!(category_concentration(&input(dec!(12000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).is_none());
}

#[test]
fn test_concentration_tie_names_first_category() {
    let t = totals(&[(Category::Other, dec!(500)), (Category::Travel, dec!(500))]);
    let a = category_concentration(&input(dec!(1000), &t, dec!(0), dec!(0)), &AdviceConfig::default()).unwrap();
    assert!(a.message.contains("Travel"));
    assert!(!a.message.contains("Other"));
}

#[test]
fn test_concentration_respects_config() {
    let t = totals(&[(Category::Food, dec!(150))]);
    let config = AdviceConfig {
        praise_ratio: dec!(0.2),
        concentration_ratio: dec!(0.1),
    };
    assert!(category_concentration(&input(dec!(1000), &t, dec!(0), dec!(0)), &config).is_some());
}

// ── goal shortfall ────────────────────────────────────────────

#[test]
fn test_goal_shortfall_states_amount() {
    let t = totals(&[]);
    let a = goal_shortfall(&input(dec!(0), &t, dec!(500), dec!(4500)), &AdviceConfig::default()).unwrap();
    assert_eq!(a.kind, AdviceKind::GoalShortfall);
    assert!(a.message.contains("4000"), "{}", a.message);
}

#[test]
fn test_goal_shortfall_trailing_zeros_trimmed() {
    let t = totals(&[]);
    let a = goal_shortfall(&input(dec!(0), &t, dec!(500.00), dec!(4500.00)), &AdviceConfig::default()).unwrap();
    assert!(a.message.contains("$4000 more"), "{}", a.message);
}

#[test]
fn test_goal_met_no_shortfall() {
    let t = totals(&[]);
    assert!(goal_shortfall(&input(dec!(0), &t, dec!(500), dec!(500)), &AdviceConfig::default()).is_none());
    assert!(goal_shortfall(&input(dec!(0), &t, dec!(0), dec!(0)), &AdviceConfig::default()).is_none());
}

// ── Advisor ───────────────────────────────────────────────────

#[test]
fn test_advisor_order() {
    let advisor = Advisor::new(AdviceConfig::default());
    let t = totals(&[(Category::Rent, dec!(900))]);
    let advice = advisor.advise(&input(dec!(1000), &t, dec!(0), dec!(100)));
    assert_eq!(
        kinds(&advice),
        vec![
            AdviceKind::SavingsReminder,
            AdviceKind::CategoryConcentration,
            AdviceKind::GoalShortfall,
        ]
    );
}

#[test]
fn test_advisor_sample_scenario() {
    let txns = crate::import::sample_transactions().unwrap();
    let budget = BudgetState::new(dec!(12000), dec!(4500), dec!(500));
    let metrics = Metrics::compute(&txns, &budget, &ForecastConfig::default());
    let advice = Advisor::new(AdviceConfig::default()).advise(&AdviceInput::new(&metrics, &budget));
    assert_eq!(kinds(&advice), vec![AdviceKind::SavingsPraise, AdviceKind::GoalShortfall]);
    assert!(advice[1].message.contains("4000"));
}

#[test]
fn test_advice_kind_warning_flag() {
    assert!(AdviceKind::OverspendWarning.is_warning());
    assert!(AdviceKind::CategoryConcentration.is_warning());
    assert!(!AdviceKind::SavingsPraise.is_warning());
    assert!(!AdviceKind::GoalShortfall.is_warning());
}

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food"), Some(Category::Food));
    assert_eq!(Category::parse("FOOD"), Some(Category::Food));
    assert_eq!(Category::parse("  Rent "), Some(Category::Rent));
    assert_eq!(Category::parse("travel"), Some(Category::Travel));
    assert_eq!(Category::parse("utilities"), Some(Category::Utilities));
    assert_eq!(Category::parse("bills"), Some(Category::Utilities));
    assert_eq!(Category::parse("other"), Some(Category::Other));
}

#[test]
fn test_category_parse_rejects_unknown() {
    assert_eq!(Category::parse("Fod"), None);
    assert_eq!(Category::parse(""), None);
    assert_eq!(Category::parse("entertainment"), None);
}

#[test]
fn test_category_all_fixed_order() {
    assert_eq!(
        Category::all(),
        &[
            Category::Food,
            Category::Rent,
            Category::Travel,
            Category::Utilities,
            Category::Other,
        ]
    );
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        let s = c.as_str();
        assert_eq!(Category::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Utilities), "Utilities");
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_new() {
    let txn = Transaction::new("2024-01-15", Category::Food, dec!(42.50));
    assert_eq!(txn.date, "2024-01-15");
    assert_eq!(txn.category, Category::Food);
    assert_eq!(txn.amount, dec!(42.50));
}

#[test]
fn test_transaction_negative_amount_clamped() {
    let txn = Transaction::new("2024-01-15", Category::Rent, dec!(-10));
    assert_eq!(txn.amount, Decimal::ZERO);
}

#[test]
fn test_transaction_today_has_iso_date() {
    let txn = Transaction::today(Category::Other, dec!(5));
    assert_eq!(txn.date.len(), 10);
    assert!(chrono::NaiveDate::parse_from_str(&txn.date, "%Y-%m-%d").is_ok());
}

// ── BudgetState ───────────────────────────────────────────────

#[test]
fn test_budget_state_default_is_zero() {
    let state = BudgetState::default();
    assert_eq!(state.income, Decimal::ZERO);
    assert_eq!(state.savings_goal, Decimal::ZERO);
    assert_eq!(state.saved_amount, Decimal::ZERO);
    assert!(state.goal_met());
}

#[test]
fn test_budget_state_shortfall() {
    let state = BudgetState::new(dec!(12000), dec!(4500), dec!(500));
    assert_eq!(state.shortfall(), dec!(4000));
    assert!(!state.goal_met());
}

#[test]
fn test_budget_state_shortfall_never_negative() {
    let state = BudgetState::new(dec!(0), dec!(100), dec!(250));
    assert_eq!(state.shortfall(), Decimal::ZERO);
    assert!(state.goal_met());
}

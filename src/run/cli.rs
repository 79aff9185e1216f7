use anyhow::Result;

use crate::dashboard::Dashboard;
use crate::ui::util::{format_amount, format_percent};

pub(crate) fn as_cli(command: &str, dashboard: &Dashboard) -> Result<()> {
    match command {
        "summary" | "s" => print!("{}", render_summary(dashboard)),
        "advice" => print!("{}", render_advice(dashboard)),
        "transactions" | "t" => print!("{}", render_transactions(dashboard)),
        "help" => print_usage(),
        "version" => println!("budgetdash {}", env!("CARGO_PKG_VERSION")),
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
    Ok(())
}

fn print_usage() {
    println!("BudgetDash - personal budget dashboard");
    println!();
    println!("Usage: budgetdash [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary, s                    Print budget metrics");
    println!("  advice                        Print budgeting advice");
    println!("  transactions, t               List transactions");
    println!("  help, --help, -h              Show this help");
    println!("  version, --version, -V        Show version");
    println!();
    println!("Options:");
    println!("  --income <amount>             Starting monthly income");
    println!("  --goal <amount>               Starting savings goal");
    println!("  --saved <amount>              Amount already saved");
    println!("  --file, -f <file.csv>         Load transactions from CSV instead of sample data");
    println!("  --empty                       Start with no transactions");
    println!("  --config, -c <file.toml>      Use this config file");
    println!("  --verbose, -v                 Debug logging");
}

pub(crate) fn render_summary(dashboard: &Dashboard) -> String {
    let budget = dashboard.budget();
    let metrics = dashboard.metrics();

    let mut lines = vec![
        "BudgetDash summary".to_string(),
        "─".repeat(40),
        format!("  Income:            {}", format_amount(budget.income)),
        format!("  Total expenses:    {}", format_amount(metrics.total_expenses)),
        format!("  Remaining budget:  {}", format_amount(metrics.remaining_budget)),
        format!(
            "  Savings:           {} of {} ({})",
            format_amount(budget.saved_amount),
            format_amount(budget.savings_goal),
            format_percent(metrics.savings_progress_percent)
        ),
        format!(
            "  Monthly estimate:  {}",
            format_amount(metrics.monthly_savings_estimate)
        ),
        format!("  Time to goal:      {}", metrics.months_to_goal),
        String::new(),
        "Spending by Category:".to_string(),
    ];
    lines.extend(
        metrics
            .category_totals
            .iter()
            .map(|(category, amount)| format!("  {:<12} {:>12}", category.as_str(), format_amount(*amount))),
    );
    lines.push(String::new());
    lines.push("Advice:".to_string());
    lines.extend(advice_lines(dashboard).into_iter().map(|l| format!("  {l}")));

    to_block(lines)
}

pub(crate) fn render_advice(dashboard: &Dashboard) -> String {
    to_block(advice_lines(dashboard))
}

pub(crate) fn render_transactions(dashboard: &Dashboard) -> String {
    let transactions = dashboard.transactions();
    if transactions.is_empty() {
        return "No transactions\n".to_string();
    }

    let mut lines = vec![format!(
        "{:>4}  {:<12} {:<10} {:>12}",
        "#", "Date", "Category", "Amount"
    )];
    lines.extend(transactions.iter().enumerate().map(|(i, txn)| {
        format!(
            "{:>4}  {:<12} {:<10} {:>12}",
            i + 1,
            txn.date,
            txn.category.as_str(),
            format_amount(txn.amount)
        )
    }));
    to_block(lines)
}

fn advice_lines(dashboard: &Dashboard) -> Vec<String> {
    dashboard
        .advice()
        .iter()
        .map(|a| format!("[{}] {}", a.kind, a.message))
        .collect()
}

/// One line per entry, newline-terminated.
fn to_block(lines: Vec<String>) -> String {
    lines.into_iter().map(|l| l + "\n").collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::Config;
    use crate::models::BudgetState;
    use rust_decimal_macros::dec;

    fn sample_dashboard() -> Dashboard {
        let config = Config {
            budget: BudgetState::new(dec!(12000), dec!(4500), dec!(500)),
            ..Config::default()
        };
        Dashboard::new(crate::import::sample_transactions().unwrap(), config)
    }

    #[test]
    fn test_summary_lists_metrics() {
        let out = render_summary(&sample_dashboard());
        assert!(out.contains("Total expenses:    $3,325.00"));
        assert!(out.contains("Remaining budget:  $8,675.00"));
        assert!(out.contains("$500.00 of $4,500.00 (11.1%)"));
        assert!(out.contains("Monthly estimate:  $2,602.50"));
        assert!(out.contains("Time to goal:      2 months"));
        assert!(out.contains("Rent"));
        assert!(out.contains("[Well done]"));
    }

    #[test]
    fn test_summary_with_no_goal() {
        let dashboard = Dashboard::new(Vec::new(), Config::default());
        let out = render_summary(&dashboard);
        assert!(out.contains("(0.0%)"));
        assert!(out.contains("Time to goal:      Goal reached"));
    }

    #[test]
    fn test_advice_one_line_per_item() {
        let out = render_advice(&sample_dashboard());
        let lines: Vec<&str> = out.lines().collect();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l.starts_with('[')));
        assert!(out.contains("$4000 more"));
    }

    #[test]
    fn test_transactions_table() {
        let out = render_transactions(&sample_dashboard());
        assert_eq!(out.lines().count(), 11);
        assert!(out.contains("2024-01-02"));
        assert!(out.contains("$1,000.00"));
    }

    #[test]
    fn test_transactions_empty() {
        let dashboard = Dashboard::new(Vec::new(), Config::default());
        assert_eq!(render_transactions(&dashboard), "No transactions\n");
    }

    #[test]
    fn test_unknown_command_errors() {
        let err = as_cli("bogus", &sample_dashboard()).unwrap_err();
        assert!(err.to_string().contains("Unknown command: bogus"));
    }
}

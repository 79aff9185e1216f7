use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use super::util::format_amount;
use crate::models::Category;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetDash", cmd_quit, r);
    register_command!("quit", "Quit BudgetDash", cmd_quit, r);
    register_command!("home", "Go to the landing page", cmd_home, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("income", "Set income (e.g. :income 12000)", cmd_income, r);
    register_command!("i", "Set income (e.g. :i 12000)", cmd_income, r);
    register_command!(
        "expense",
        "Add expense (e.g. :expense Food 42.50)",
        cmd_expense,
        r
    );
    register_command!("e", "Add expense (e.g. :e Food 42.50)", cmd_expense, r);
    register_command!("goal", "Set savings goal (e.g. :goal 4500)", cmd_goal, r);
    register_command!("g", "Set savings goal (e.g. :g 4500)", cmd_goal, r);
    register_command!("save", "Move the fixed increment into savings", cmd_save, r);
    register_command!("s", "Move the fixed increment into savings", cmd_save, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_home(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Home;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :income <amount>");
        return Ok(());
    }
    let income = app.dashboard.set_income(args);
    app.set_status(format!("Income set to {}", format_amount(income)));
    Ok(())
}

fn cmd_goal(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :goal <amount>");
        return Ok(());
    }
    let goal = app.dashboard.set_savings_goal(args);
    app.set_status(format!("Savings goal set to {}", format_amount(goal)));
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut parts = args.splitn(2, ' ');
    let category_name = parts.next().unwrap_or("").trim();
    let amount = parts.next().unwrap_or("").trim();

    if category_name.is_empty() {
        app.set_status("Usage: :expense <category> <amount>");
        return Ok(());
    }

    let Some(category) = Category::parse(category_name) else {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Unknown category '{category_name}'. Use one of: {}",
            names.join(", ")
        ));
        return Ok(());
    };

    let txn = app.dashboard.add_expense(category, amount);
    let msg = format!("Added {} expense of {}", txn.category, format_amount(txn.amount));
    app.set_status(msg);
    Ok(())
}

fn cmd_save(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.add_to_savings();
    Ok(())
}

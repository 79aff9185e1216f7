use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType,
        Paragraph, Wrap,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::metrics::{GoalForecast, Metrics};
use crate::models::Transaction;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, format_whole};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let metrics = app.dashboard.metrics();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Breakdown + category charts
            Constraint::Length(9), // Spending line + advice
            Constraint::Length(3), // Savings gauge
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_summary_cards(f, chunks[0], app, &metrics);
    render_breakdown_chart(f, charts[0], app, &metrics);
    render_category_chart(f, charts[1], &metrics);
    render_spending_line(f, lower[0], app.dashboard.transactions());
    render_advice(f, lower[1], app);
    render_savings_gauge(f, chunks[3], app, &metrics);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App, metrics: &Metrics) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let budget = app.dashboard.budget();
    let txn_count = app.dashboard.transactions().len();

    render_card(f, cards[0], "Income", budget.income, theme::GREEN, None);
    render_card(
        f,
        cards[1],
        "Expenses",
        metrics.total_expenses,
        theme::RED,
        Some(format!("{txn_count} txns")),
    );
    render_card(
        f,
        cards[2],
        "Remaining Budget",
        metrics.remaining_budget,
        theme::signed_color(metrics.remaining_budget >= Decimal::ZERO),
        None,
    );
    render_card(
        f,
        cards[3],
        "Saved",
        budget.saved_amount,
        theme::ACCENT,
        Some(format!("of {}", format_amount(budget.savings_goal))),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

/// Expenses vs remaining budget vs savings.
fn render_breakdown_chart(f: &mut Frame, area: Rect, app: &App, metrics: &Metrics) {
    let slices = [
        ("Expenses", metrics.total_expenses, theme::RED),
        ("Remaining", metrics.remaining_budget, theme::ACCENT),
        ("Savings", app.dashboard.budget().saved_amount, theme::GREEN),
    ];

    let bars: Vec<Bar> = slices
        .iter()
        .map(|(label, amount, color)| {
            Bar::default()
                .value(bar_value(*amount))
                .label(Line::from(*label))
                .text_value(format_amount(*amount))
                .style(Style::default().fg(*color))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(*color))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Budget Breakdown"))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, metrics: &Metrics) {
    let bars: Vec<Bar> = metrics
        .category_totals
        .iter()
        .map(|(category, amount)| {
            let color = theme::category_color(*category);
            Bar::default()
                .value(bar_value(*amount))
                .label(Line::from(category.as_str()))
                .text_value(format_whole(*amount))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);

    f.render_widget(chart, area);
}

fn render_spending_line(f: &mut Frame, area: Rect, transactions: &[Transaction]) {
    let points = cumulative_spending(transactions);
    if points.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses yet. Add one with :expense <category> <amount>",
            theme::dim_style(),
        )))
        .centered()
        .block(panel("Cumulative Spending"));
        f.render_widget(msg, area);
        return;
    }

    let max_x = (points.len().saturating_sub(1)).max(1) as f64;
    let max_y = points.last().map(|(_, y)| *y).unwrap_or(0.0).max(1.0);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::YELLOW))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(panel("Cumulative Spending"))
        .x_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, max_x])
                .labels(vec![
                    Span::raw("1"),
                    Span::raw(format!("{}", points.len())),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, max_y])
                .labels(vec![Span::raw("0"), Span::raw(format!("{max_y:.0}"))]),
        );

    f.render_widget(chart, area);
}

fn render_advice(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .dashboard
        .advice()
        .into_iter()
        .map(|a| {
            Line::from(vec![
                Span::styled(format!("[{}] ", a.kind), theme::advice_style(a.kind)),
                Span::styled(a.message, theme::normal_style()),
            ])
        })
        .collect();

    let advice = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("Advice"));
    f.render_widget(advice, area);
}

fn render_savings_gauge(f: &mut Frame, area: Rect, app: &App, metrics: &Metrics) {
    let budget = app.dashboard.budget();
    let ratio = (metrics.savings_progress_percent / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let forecast = match metrics.months_to_goal {
        GoalForecast::Months(_) => format!(
            "goal in {} at {}/mo",
            metrics.months_to_goal,
            format_amount(metrics.monthly_savings_estimate)
        ),
        other => other.to_string(),
    };

    let label = format!(
        "{} of {} ({}) · {forecast}",
        format_amount(budget.saved_amount),
        format_amount(budget.savings_goal),
        format_percent(metrics.savings_progress_percent),
    );

    let gauge = Gauge::default()
        .block(panel(&format!(
            "Savings Goal · s adds {}",
            format_amount(app.dashboard.savings_increment())
        )))
        .gauge_style(Style::default().fg(theme::GREEN).bg(theme::SURFACE))
        .ratio(ratio)
        .label(Span::styled(label, theme::normal_style()));

    f.render_widget(gauge, area);
}

fn bar_value(amount: Decimal) -> u64 {
    amount.max(Decimal::ZERO).round().to_u64().unwrap_or(0)
}

/// Running total of spending in store order, as (index, total) chart points.
pub(crate) fn cumulative_spending(transactions: &[Transaction]) -> Vec<(f64, f64)> {
    let mut running = Decimal::ZERO;
    transactions
        .iter()
        .enumerate()
        .map(|(i, t)| {
            running = running.saturating_add(t.amount);
            (i as f64, running.to_f64().unwrap_or(0.0))
        })
        .collect()
}

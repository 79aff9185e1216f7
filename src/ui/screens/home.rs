use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Landing page that links to the dashboard.
pub(crate) fn render(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to BudgetDash",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Track income, expenses and savings at a glance.",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", theme::dim_style()),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to go to the dashboard", theme::dim_style()),
        ]),
    ];

    let welcome = Paragraph::new(text).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(welcome, rows[1]);
}

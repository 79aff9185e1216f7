use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.dashboard.transactions();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Transactions ({}) ", transactions.len()),
            theme::title_style(),
        ));

    if transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :expense <category> <amount>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["#", "Date", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let window = app
        .txn_cursor
        .window(transactions.len(), area.height.saturating_sub(3) as usize);

    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(window.start)
        .take(window.len())
        .map(|(i, txn)| {
            let style = if i == app.txn_cursor.selected {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(txn.date.as_str()),
                Cell::from(Span::styled(
                    txn.category.as_str(),
                    Style::default().fg(theme::category_color(txn.category)),
                )),
                Cell::from(format_amount(txn.amount)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(14),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

use ratatui::style::{Color, Modifier, Style};

use crate::advice::AdviceKind;
use crate::models::Category;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const PEACH: Color = Color::Rgb(250, 179, 135);
pub(crate) const MAUVE: Color = Color::Rgb(203, 166, 247);
pub(crate) const TEAL: Color = Color::Rgb(148, 226, 213);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

/// Stable per-category colour shared by the bar chart and the table.
pub(crate) fn category_color(category: Category) -> Color {
    match category {
        Category::Food => PEACH,
        Category::Rent => MAUVE,
        Category::Travel => ACCENT,
        Category::Utilities => TEAL,
        Category::Other => YELLOW,
    }
}

pub(crate) fn advice_style(kind: AdviceKind) -> Style {
    let color = match kind {
        AdviceKind::OverspendWarning | AdviceKind::CategoryConcentration => RED,
        AdviceKind::SavingsPraise => GREEN,
        AdviceKind::SavingsReminder | AdviceKind::GoalShortfall => YELLOW,
    };
    let style = Style::default().fg(color);
    if kind.is_warning() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Green for zero or above, red below.
pub(crate) fn signed_color(positive: bool) -> Color {
    if positive {
        GREEN
    } else {
        RED
    }
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

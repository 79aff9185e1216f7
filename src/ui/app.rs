use super::cursor::TableCursor;
use crate::dashboard::{Dashboard, SavingsOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Home,
    Dashboard,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Home, Self::Dashboard, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) dashboard: Dashboard,

    pub(crate) txn_cursor: TableCursor,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(dashboard: Dashboard) -> Self {
        Self {
            running: true,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            dashboard,

            txn_cursor: TableCursor::default(),

            visible_rows: 20,
        }
    }

    /// Top up savings and report the outcome on the command bar.
    pub(crate) fn add_to_savings(&mut self) -> SavingsOutcome {
        let outcome = self.dashboard.add_to_savings();
        self.set_status(outcome.notice());
        outcome
    }

    /// Table rows that fit on the transactions screen (borders + header).
    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

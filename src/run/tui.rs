use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::dashboard::Dashboard;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;

pub(crate) fn as_tui(dashboard: Dashboard) -> Result<()> {
    let mut app = App::new(dashboard);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("TUI started");
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => tracing::info!("TUI exited"),
        Err(ref e) => {
            tracing::error!(error = ?e, "TUI exited with error");
            eprintln!("Error: {e:?}");
        }
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(3) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.screen == Screen::Transactions {
                let (len, page) = (app.dashboard.transactions().len(), app.transaction_page());
                app.txn_cursor.half_page_down(len, page);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.screen == Screen::Transactions {
                let page = app.transaction_page();
                app.txn_cursor.half_page_up(page);
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => switch_screen(app, Screen::Home),
        KeyCode::Char('2') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('3') => switch_screen(app, Screen::Transactions),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Enter if app.screen == Screen::Home => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('s') if app.screen == Screen::Dashboard => {
            app.add_to_savings();
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') | KeyCode::Home => {
            if app.screen == Screen::Transactions {
                app.txn_cursor.first();
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if app.screen == Screen::Transactions {
                let (len, page) = (app.dashboard.transactions().len(), app.transaction_page());
                app.txn_cursor.last(len, page);
            }
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.status_message.clear();
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Transactions {
        let (len, page) = (app.dashboard.transactions().len(), app.transaction_page());
        app.txn_cursor.down(len, page);
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Transactions {
        app.txn_cursor.up();
    }
}

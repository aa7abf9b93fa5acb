use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{info, warn};

use crate::store::ExpenseStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::form::FormField;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &ExpenseStore) -> Result<()> {
    let mut app = App::new(Local::now().date_naive());
    app.refresh(store)?;
    info!(
        "Starting TUI with {} expenses from {}",
        app.expenses.len(),
        store.path().display()
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &ExpenseStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(3) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            let outcome = match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store),
                InputMode::Command => handle_command_input(key, app, store),
                InputMode::Editing => handle_editing_input(key, app),
            };
            // Failed actions are reported, the session keeps going
            if let Err(e) = outcome {
                warn!("{e:#}");
                app.set_status(format!("Error: {e}"));
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &ExpenseStore) -> Result<()> {
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
            for _ in 0..table_page(app) / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..table_page(app) / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::AddExpense)?,
        KeyCode::Char('2') => switch_screen(app, store, Screen::Dashboard)?,
        KeyCode::Char('3') => switch_screen(app, store, Screen::Analysis)?,
        KeyCode::Char('4') => switch_screen(app, store, Screen::Export)?,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, store, screens[next])?;
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev])?;
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right
            if app.screen == Screen::AddExpense =>
        {
            app.form.adjust(1);
        }
        KeyCode::Char('-') | KeyCode::Left if app.screen == Screen::AddExpense => {
            app.form.adjust(-1);
        }
        KeyCode::Enter if app.screen == Screen::AddExpense => handle_form_enter(app, store)?,
        KeyCode::Char('r') if app.screen != Screen::AddExpense => {
            commands::handle_command("preset", app, store)?;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }
    Ok(())
}

fn handle_form_enter(app: &mut App, store: &ExpenseStore) -> Result<()> {
    let field = app.form.field;
    if field == FormField::Submit {
        app.submit_form(store)?;
    } else if field.is_text() {
        app.command_input = app.form.value(field);
        app.input_mode = InputMode::Editing;
    } else {
        app.form.field = field.next();
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
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
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

/// Typing into a form field. Enter keeps the text and moves on, Esc drops it.
fn handle_editing_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let field = app.form.field;
            let text = std::mem::take(&mut app.command_input);
            app.form.set_text(field, text);
            app.form.field = field.next();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn switch_screen(app: &mut App, store: &ExpenseStore, screen: Screen) -> Result<()> {
    app.switch_screen(screen, store)?;
    app.set_status(format!("{screen}"));
    Ok(())
}

/// Rows the expense table can show on the current screen.
fn table_page(app: &App) -> usize {
    let chrome = match app.screen {
        Screen::Dashboard => 9,
        Screen::Export => 16,
        Screen::AddExpense | Screen::Analysis => 0,
    };
    app.visible_rows.saturating_sub(chrome).max(1)
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::AddExpense => app.form.field = app.form.field.next(),
        Screen::Dashboard | Screen::Export => {
            let page = table_page(app);
            let len = app.table.len();
            scroll_down(&mut app.table_index, &mut app.table_scroll, len, page);
        }
        Screen::Analysis => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::AddExpense => app.form.field = app.form.field.prev(),
        Screen::Dashboard | Screen::Export => {
            scroll_up(&mut app.table_index, &mut app.table_scroll);
        }
        Screen::Analysis => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::AddExpense => app.form.field = FormField::Date,
        Screen::Dashboard | Screen::Export => {
            scroll_to_top(&mut app.table_index, &mut app.table_scroll);
        }
        Screen::Analysis => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::AddExpense => app.form.field = FormField::Submit,
        Screen::Dashboard | Screen::Export => {
            let page = table_page(app);
            let len = app.table.len();
            scroll_to_bottom(&mut app.table_index, &mut app.table_scroll, len, page);
        }
        Screen::Analysis => {}
    }
}

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("session started");
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        transactions = app.manager.transaction_count(),
        thresholds = app.manager.thresholds().len(),
        "session ended"
    );
    if let Err(ref e) = result {
        tracing::error!("{e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, list borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app)?;
        }
    }
    Ok(())
}

/// Route one key press. Overlays swallow the key that dismisses them.
pub(crate) fn handle_key(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    if app.current_alert().is_some() {
        app.dismiss_alert();
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
    }
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
            for _ in 0..app.page_size() / 2 {
                move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.page_size() / 2 {
                move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_down(app),
        KeyCode::Char('k') | KeyCode::Up => move_up(app),
        KeyCode::Char('g') => {
            if let Some((index, scroll)) = app.cursor_mut() {
                scroll_to_top(index, scroll);
            }
        }
        KeyCode::Char('G') => {
            let (len, page) = (app.list_len(), app.page_size());
            if let Some((index, scroll)) = app.cursor_mut() {
                scroll_to_bottom(index, scroll, len, page);
            }
        }
        KeyCode::Char('1') => app.screen = Screen::Home,
        KeyCode::Char('2') => app.screen = Screen::Transactions,
        KeyCode::Char('3') => app.screen = Screen::Overview,
        KeyCode::Char('4') => app.screen = Screen::Categories,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.screen = screens[(idx + 1) % screens.len()];
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.screen = screens[prev];
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
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

// ── Navigation helpers ───────────────────────────────────────

fn move_down(app: &mut App) {
    let (len, page) = (app.list_len(), app.page_size());
    if let Some((index, scroll)) = app.cursor_mut() {
        scroll_down(index, scroll, len, page);
    }
}

fn move_up(app: &mut App) {
    if let Some((index, scroll)) = app.cursor_mut() {
        scroll_up(index, scroll);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crossterm::event::KeyEvent;
    use rust_decimal_macros::dec;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
    }

    fn type_command(app: &mut App, cmd: &str) {
        press(app, KeyCode::Char(':'));
        for c in cmd.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_command_mode_runs_command() {
        let mut app = App::new();
        type_command(&mut app, "category Food 100");
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.manager.list_categories(), vec!["Food"]);
    }

    #[test]
    fn test_escape_cancels_command() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char(':'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.command_input.is_empty());
        assert!(app.running);
    }

    #[test]
    fn test_backspace_on_empty_leaves_command_mode() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char(':'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_alert_popup_swallows_next_key() {
        let mut app = App::new();
        app.add_category("Food", dec!(50));
        app.add_category("Food", dec!(80));
        type_command(&mut app, "add March 2024 90 Food");
        assert_eq!(app.alerts.len(), 2);

        // Each key dismisses one alert and does nothing else
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.alerts.len(), 1);
        assert_eq!(app.screen, Screen::Home);
        press(&mut app, KeyCode::Char('3'));
        assert!(app.alerts.is_empty());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::Overview);
    }

    #[test]
    fn test_tab_cycles_screens() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Transactions);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, Screen::Categories);
    }

    #[test]
    fn test_history_cursor_moves_within_bounds() {
        let mut app = App::new();
        app.add_category("Food", dec!(1000));
        for _ in 0..3 {
            app.add_transaction("2024-1".into(), dec!(1), "Food".into());
        }
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.history_index, 2);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.history_index, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.history_index, 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.history_index, 0);
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('2'));
        assert!(!app.show_help);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = App::new();
        handle_key(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            &mut app,
        )
        .unwrap();
        assert!(!app.running);
    }
}

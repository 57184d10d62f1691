#![allow(clippy::unwrap_used)]

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use rust_decimal_macros::dec;

use super::app::{App, Screen};
use super::commands::handle_command;
use super::render::render;
use super::screens::overview::{canvas_for, chronological};
use crate::expenses::ExpenseManager;
use crate::models::Alert;

fn draw(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn sample_app() -> App {
    let mut app = App::new();
    for cmd in [
        "category Food 100",
        "category Rent 900",
        "add Jan 2024 10 Food",
        "add Jan 2024 5 Rent",
        "add Feb 2024 7 Food",
    ] {
        handle_command(cmd, &mut app).unwrap();
    }
    app
}

#[test]
fn test_every_screen_renders() {
    let mut app = sample_app();
    for screen in Screen::all() {
        app.screen = *screen;
        let screen_text = text(&draw(&app, 100, 40));
        assert!(screen_text.contains(&screen.to_string()));
    }
}

#[test]
fn test_saturated_totals_render() {
    let mut app = App::new();
    app.manager.set_category_threshold("Food", dec!(-5));
    let mut alerts: Vec<Alert> = Vec::new();
    let big = dec!(50000000000000000000000000000);
    app.manager.add_transaction("2024-3", big, "Food", &mut alerts);
    app.manager.add_transaction("2024-3", big, "Food", &mut alerts);
    for screen in Screen::all() {
        app.screen = *screen;
        draw(&app, 100, 40);
    }
    app.screen = Screen::Categories;
    assert!(text(&draw(&app, 120, 24)).contains("Over by"));
}

#[test]
fn test_empty_screens_render() {
    let mut app = App::new();
    for screen in Screen::all() {
        app.screen = *screen;
        draw(&app, 80, 24);
    }
    app.screen = Screen::Overview;
    assert!(text(&draw(&app, 80, 24)).contains("Nothing to chart yet"));
}

#[test]
fn test_history_screen_shows_lines() {
    let mut app = sample_app();
    app.screen = Screen::Transactions;
    let screen_text = text(&draw(&app, 100, 30));
    assert!(screen_text.contains("Date: 2024-1, Amount: 10, Category: Food"));
    assert!(screen_text.contains("Date: 2024-2, Amount: 7, Category: Food"));
}

#[test]
fn test_overview_titles_each_month() {
    let mut app = sample_app();
    app.screen = Screen::Overview;
    let screen_text = text(&draw(&app, 100, 40));
    assert!(screen_text.contains("Transactions for 2024-1"));
    assert!(screen_text.contains("Transactions for 2024-2"));
}

#[test]
fn test_alert_popup_renders() {
    let mut app = sample_app();
    app.alerts.push_back(Alert {
        category: "Food".into(),
        current_total: dec!(110),
        limit: dec!(100),
    });
    let screen_text = text(&draw(&app, 100, 30));
    assert!(screen_text.contains("Spending limit exceeded for Food"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = sample_app();
    app.show_help = true;
    for screen in Screen::all() {
        app.screen = *screen;
        draw(&app, 10, 6);
    }
}

// ── overview helpers ──────────────────────────────────────────

#[test]
fn test_chronological_month_order() {
    let mut mgr = ExpenseManager::new();
    let mut sink: Vec<Alert> = Vec::new();
    for month in ["2024-10", "2023-12", "2024-2", "odd", "2024-1"] {
        mgr.add_transaction(month, dec!(1), "A", &mut sink);
    }
    let totals = mgr.monthly_category_totals();
    let months: Vec<&str> = chronological(&totals).into_iter().map(|(m, _)| m).collect();
    assert_eq!(months, vec!["2023-12", "2024-1", "2024-2", "2024-10", "odd"]);
}

#[test]
fn test_canvas_for_area() {
    let canvas = canvas_for(Rect::new(0, 0, 52, 12));
    assert_eq!(canvas.width, 500);
    assert_eq!(canvas.height, 300);
}

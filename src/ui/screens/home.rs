use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

const ACTIONS: [(&str, &str, &str); 4] = [
    (
        "Add Category & Threshold",
        ":category <name> <threshold>",
        "Register a spending limit",
    ),
    (
        "Add Transaction",
        ":add <month> <year> <amount> <category>",
        "Record an expense",
    ),
    ("View Transactions", ":history  or  2", "Full transaction log"),
    ("Overview", ":overview  or  3", "Bar chart for each month"),
];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(6),    // Actions
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_actions(f, chunks[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let categories = app.manager.list_categories().len();
    let over = app
        .manager
        .list_categories()
        .into_iter()
        .filter(|c| !app.manager.check_threshold(c).is_empty())
        .count();

    render_card(
        f,
        cards[0],
        "Categories",
        categories.to_string(),
        theme::ACCENT,
        format!("{} thresholds", app.manager.thresholds().len()),
    );
    render_card(
        f,
        cards[1],
        "Transactions",
        app.manager.transaction_count().to_string(),
        theme::GREEN,
        format!("{} months", app.manager.monthly_category_totals().len()),
    );
    render_card(
        f,
        cards[2],
        "Over Limit",
        over.to_string(),
        if over > 0 { theme::RED } else { theme::GREEN },
        "categories".to_string(),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_actions(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    for (label, command, hint) in ACTIONS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {label:<26}"),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{command:<42}"), theme::normal_style()),
            Span::styled(hint, theme::dim_style()),
        ]));
    }

    if app.manager.list_categories().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Start by adding a category, e.g. :category Food 250",
            theme::dim_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" PocketPlan Expense Manager ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

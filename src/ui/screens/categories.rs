use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let thresholds = app.manager.thresholds();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(
                " Categories ({}) / Thresholds ({}) ",
                app.manager.list_categories().len(),
                thresholds.len()
            ),
            theme::title_style(),
        ));

    if thresholds.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No categories yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Use :category <name> <threshold> to add one",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Category", "Threshold", "Spent", "Status"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = thresholds
        .iter()
        .enumerate()
        .skip(app.category_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, threshold)| {
            let spent = app.manager.total_for(&threshold.category);
            let (status, status_style) = if threshold.is_exceeded_by(spent) {
                (
                    format!("Over by {}", spent.saturating_sub(threshold.limit)),
                    theme::over_limit_style(),
                )
            } else {
                ("Within limit".to_string(), theme::under_limit_style())
            };

            let style = if i == app.category_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&threshold.category, 28)),
                Cell::from(threshold.limit.to_string()),
                Cell::from(spent.to_string()),
                Cell::from(Span::styled(status, status_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(22),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

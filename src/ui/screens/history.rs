use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let history = app.manager.view_history();
    let count = app.manager.transaction_count();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Transactions ({count}) "),
            theme::title_style(),
        ));

    if count == 0 {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add <month> <year> <amount> <category>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let items: Vec<ListItem> = history
        .lines()
        .enumerate()
        .skip(app.history_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, line)| {
            let style = if i == app.history_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", i + 1), theme::dim_style()),
                Span::styled(line.to_string(), style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar as BarWidget, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::chart::{self, Canvas, BAR_GAP, BAR_WIDTH, FIRST_BAR_X, MAX_BAR_HEIGHT};
use crate::expenses::{CategoryTotals, MonthlyTotals};
use crate::input::{month_label, split_month_key};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

/// Terminal rows given to each month's chart, borders included.
pub(crate) const CHART_ROWS: usize = 12;

/// Chart units per terminal column.
const UNITS_PER_CELL: i32 = 10;
const CANVAS_HEIGHT: i32 = 300;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.manager.monthly_category_totals();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Monthly Transaction Overview ({} months) ", totals.len()),
            theme::title_style(),
        ));

    if totals.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("Nothing to chart yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add transactions with :add to see a chart per month",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let months = chronological(&totals);
    let per_page = (inner.height as usize / CHART_ROWS).max(1);
    let visible: Vec<_> = months
        .iter()
        .enumerate()
        .skip(app.overview_scroll)
        .take(per_page)
        .collect();

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Length(CHART_ROWS as u16))
        .collect();
    constraints.push(Constraint::Min(0));
    let slots = Layout::vertical(constraints).split(inner);

    for (slot, (i, (month, category_totals))) in slots.iter().zip(visible) {
        render_month(f, *slot, month, category_totals, i == app.overview_index);
    }
}

/// Months in calendar order. Keys that are not `YYYY-M` go last, in string order.
pub(crate) fn chronological(totals: &MonthlyTotals) -> Vec<(&str, &CategoryTotals)> {
    let mut months: Vec<(&str, &CategoryTotals)> =
        totals.iter().map(|(k, v)| (k.as_str(), v)).collect();
    months.sort_by_key(|(key, _)| {
        let parsed = split_month_key(key);
        (parsed.is_none(), parsed, *key)
    });
    months
}

/// Canvas matching the columns available to one chart.
pub(crate) fn canvas_for(area: Rect) -> Canvas {
    let columns = i32::from(area.width.saturating_sub(2));
    Canvas::new(columns * UNITS_PER_CELL, CANVAS_HEIGHT)
}

fn render_month(
    f: &mut Frame,
    area: Rect,
    month: &str,
    totals: &CategoryTotals,
    selected: bool,
) {
    let canvas = canvas_for(area);
    let bars = chart::layout_month(totals, canvas);
    let (shown, hidden): (Vec<&chart::Bar>, Vec<&chart::Bar>) =
        bars.iter().partition(|b| b.fits(canvas));

    let mut title = format!(" Transactions for {month} · {} ", month_label(month));
    if !hidden.is_empty() {
        title.push_str(&format!("(+{} not shown) ", hidden.len()));
    }

    let border = if selected { theme::ACCENT } else { theme::OVERLAY };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, theme::title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_cells = (BAR_WIDTH / UNITS_PER_CELL) as u16;
    let columns = Layout::horizontal([
        Constraint::Length((FIRST_BAR_X / UNITS_PER_CELL) as u16),
        Constraint::Min(0),
    ])
    .split(inner);

    let data: Vec<BarWidget> = shown
        .iter()
        .map(|bar| {
            let color = theme::bar_color(bar.color);
            BarWidget::default()
                .value(bar.visible_height())
                .text_value(bar.value.to_string())
                .label(Line::from(truncate(&bar.label, bar_cells as usize)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&data))
        .bar_width(bar_cells)
        .bar_gap((BAR_GAP / UNITS_PER_CELL) as u16)
        .max(MAX_BAR_HEIGHT as u64)
        .label_style(theme::normal_style());

    f.render_widget(chart, columns[1]);
}

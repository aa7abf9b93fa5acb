use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table},
    Frame,
};

use super::{render_filter_line, render_no_data};
use crate::chart::{self, PieChart};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    render_filter_line(f, chunks[0], &app.analysis_filter);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    match &app.charts.category_pie {
        Some(pie) => render_pie(f, top[0], pie),
        None => render_no_data(f, top[0], "Expenses by Category"),
    }
    match &app.charts.monthly_bar {
        Some(bar) => render_bar(f, top[1], bar),
        None => render_no_data(f, top[1], "Monthly Expense Trends"),
    }
    match &app.charts.category_comparison {
        Some(bar) => render_bar(f, bottom[0], bar),
        None => render_no_data(f, bottom[0], "Expense Comparison by Category"),
    }
    render_monthly_table(f, bottom[1], app);
}

/// Each slice drawn as a colored bar whose length is its share of the whole.
fn render_pie(f: &mut Frame, area: Rect, pie: &PieChart) {
    let label_width = 18;
    let bar_space = (area.width as usize).saturating_sub(label_width + 12);

    let lines: Vec<Line> = pie
        .slices
        .iter()
        .zip(pie.percentages())
        .map(|(slice, pct)| {
            let filled = ((pct / 100.0) * bar_space as f64).round() as usize;
            Line::from(vec![
                Span::styled(
                    format!(" {:<w$}", truncate(&slice.label, label_width - 2), w = label_width - 1),
                    theme::normal_style(),
                ),
                Span::styled(
                    "█".repeat(filled.max(1)),
                    Style::default().fg(theme::chart_color(slice.color)),
                ),
                Span::styled(format!(" {pct:.1}%"), theme::dim_style()),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(theme::panel(pie.title.clone())),
        area,
    );
}

fn render_bar(f: &mut Frame, area: Rect, chart: &chart::BarChart) {
    let max_chars = chart.category_axis.max_tick_chars;
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|entry| {
            let label = match max_chars {
                Some(n) => truncate(&entry.label, n),
                None => entry.label.clone(),
            };
            let color = theme::chart_color(entry.color);
            Bar::default()
                .value(entry.value.round().max(0.0) as u64)
                .label(Line::from(label))
                .text_value(format!("${:.2}", entry.value))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let title = format!(
        "{} ({} vs {})",
        chart.title, chart.value_axis.label, chart.category_axis.label
    );
    let widget = BarChart::default()
        .block(theme::panel(title))
        .data(BarGroup::default().bars(&bars))
        .max(chart.max_value().ceil().max(1.0) as u64);

    let widget = match chart.orientation {
        chart::Orientation::Vertical => widget.bar_width(10).bar_gap(1),
        chart::Orientation::Horizontal => widget
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0),
    };

    f.render_widget(widget, area);
}

fn render_monthly_table(f: &mut Frame, area: Rect, app: &App) {
    let title = "Monthly Summary";
    if app.monthly_totals.is_empty() {
        render_no_data(f, area, title);
        return;
    }

    let header = Row::new(
        ["Month", "Total Expense"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = app
        .monthly_totals
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(m.month.clone()),
                Cell::from(Span::styled(format_amount(m.total), theme::amount_style())),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(14)])
        .header(header)
        .block(theme::panel(title));
    f.render_widget(table, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{render_expense_table, render_filter_line, render_no_data};
use crate::export::{self, ExportFormat};
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter line
            Constraint::Min(6),    // Preview
            Constraint::Length(8), // Summary
            Constraint::Length(4), // Hint
        ])
        .split(area);

    render_filter_line(f, chunks[0], &app.export_filter);

    if app.table.is_empty() {
        render_no_data(f, chunks[1], "Data Preview");
    } else {
        render_expense_table(
            f,
            chunks[1],
            format!("Data Preview ({} records)", app.table.len()),
            &app.table,
            app.table_scroll,
            Some(app.table_index),
        );
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_summary(f, bottom[0], app);
    render_formats(f, bottom[1], app);

    let hint = Paragraph::new(vec![
        Line::from(Span::styled(
            " :export csv [path]   Download as CSV",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            " :export json [path]  Download as JSON (defaults to your home directory)",
            theme::normal_style(),
        )),
    ])
    .block(theme::panel("Export"));
    f.render_widget(hint, chunks[3]);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = export::summary_rows(&app.filtered, &app.export_filter)
        .into_iter()
        .map(|(metric, value)| {
            Row::new(vec![
                Cell::from(Span::styled(metric, theme::dim_style())),
                Cell::from(value),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(10)])
        .header(Row::new(vec![
            Cell::from("Metric").style(theme::header_style()),
            Cell::from("Value").style(theme::header_style()),
        ]))
        .block(theme::panel("Export Summary"));
    f.render_widget(table, area);
}

/// Target file names for the current filter.
fn render_formats(f: &mut Frame, area: Rect, app: &App) {
    let filter = &app.export_filter;
    let lines: Vec<Line> = [ExportFormat::Csv, ExportFormat::Json]
        .into_iter()
        .map(|format| {
            Line::from(vec![
                Span::styled(format!(" {:<5} ", format.to_string()), theme::dim_style()),
                Span::styled(
                    export::file_name(filter.start, filter.end, format),
                    theme::normal_style(),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(theme::panel("File Names")), area);
}

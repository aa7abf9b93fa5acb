use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use super::{render_expense_table, render_filter_line, render_no_data};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_value, format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter line
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Table and breakdown
        ])
        .split(area);

    render_filter_line(f, chunks[0], &app.dashboard_filter);
    render_summary_cards(f, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    if app.table.is_empty() {
        render_no_data(f, body[0], "Expenses");
    } else {
        render_expense_table(
            f,
            body[0],
            format!("Expenses ({})", app.table.len()),
            &app.table,
            app.table_scroll,
            Some(app.table_index),
        );
    }
    render_category_breakdown(f, body[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let s = &app.summary;
    render_card(f, cards[0], "Total Expenses", s.total, theme::RED);
    render_card(f, cards[1], "Average Expense", s.average, theme::YELLOW);
    render_card(f, cards[2], "Maximum Expense", s.max, theme::ACCENT);
    render_count_card(f, cards[3], s.count);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_count_card(f: &mut Frame, area: Rect, count: usize) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(theme::GREEN).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(theme::panel("Number of Expenses"));

    f.render_widget(text, area);
}

fn render_category_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let title = "Expense Breakdown by Category";
    if app.category_totals.is_empty() {
        render_no_data(f, area, title);
        return;
    }

    let bars: Vec<Bar> = app
        .category_totals
        .iter()
        .map(|ct| {
            Bar::default()
                .value(bar_value(ct.total))
                .label(Line::from(truncate(ct.category.as_str(), 16)))
                .text_value(format_amount(ct.total))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel(title))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(theme::ACCENT));

    f.render_widget(chart, area);
}

pub(crate) mod analysis;
pub(crate) mod dashboard;
pub(crate) mod entry;
pub(crate) mod export;

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Expense, DATE_FORMAT};
use crate::report::ExpenseFilter;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

const NO_DATA: &str = "No expense data available for the selected filters.";

/// Centered dim message inside a titled panel, shown in place of empty charts and tables.
pub(crate) fn render_placeholder(f: &mut Frame, area: Rect, title: &str, msg: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(msg.to_string(), theme::dim_style())),
    ];
    f.render_widget(
        Paragraph::new(text).centered().block(theme::panel(title)),
        area,
    );
}

pub(crate) fn render_no_data(f: &mut Frame, area: Rect, title: &str) {
    render_placeholder(f, area, title, NO_DATA);
}

/// One-line description of the active filter.
pub(crate) fn render_filter_line(f: &mut Frame, area: Rect, filter: &ExpenseFilter) {
    let line = Line::from(vec![
        Span::styled(" Dates: ", theme::dim_style()),
        Span::styled(filter.date_range_label(), theme::normal_style()),
        Span::styled("   Categories: ", theme::dim_style()),
        Span::styled(filter.categories_label(), theme::normal_style()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Date, Category, Amount, Description rows. `cursor` highlights a row when set.
pub(crate) fn render_expense_table(
    f: &mut Frame,
    area: Rect,
    title: String,
    expenses: &[Expense],
    scroll: usize,
    cursor: Option<usize>,
) {
    let header = Row::new(
        ["Date", "Category", "Amount", "Description"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .enumerate()
        .skip(scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, e)| {
            let style = if cursor == Some(i) {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(e.date.format(DATE_FORMAT).to_string()),
                Cell::from(e.category.as_str()),
                Cell::from(Span::styled(format_amount(e.amount), theme::amount_style())),
                Cell::from(truncate(&e.description, 40)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Min(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel(title));
    f.render_widget(table, area);
}

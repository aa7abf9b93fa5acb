use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::render_expense_table;
use crate::ui::app::{App, InputMode};
use crate::ui::form::FormField;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_form(f, chunks[0], app);
    render_recent(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let mut lines = vec![Line::from("")];

    for field in FormField::all() {
        let focused = *field == form.field;
        let marker = if focused { "> " } else { "  " };

        if *field == FormField::Submit {
            lines.push(Line::from(""));
            let style = if focused {
                theme::selected_style().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::ACCENT)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("[ {} ]", field.label()), style),
            ]));
            continue;
        }

        let editing = focused && app.input_mode == InputMode::Editing;
        let value = if editing {
            format!("{}_", app.command_input)
        } else {
            form.value(*field)
        };
        let value = match *field {
            FormField::Category => format!("< {value} >"),
            _ if value.is_empty() => "-".to_string(),
            _ => value,
        };
        let value_style = if editing {
            Style::default().fg(theme::GREEN)
        } else if focused {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            theme::normal_style()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme::ACCENT)),
            Span::styled(format!("{:<24}", field.label()), theme::dim_style()),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter to edit or submit, +/- to change category",
        theme::dim_style(),
    )));

    f.render_widget(Paragraph::new(lines).block(theme::panel("Add New Expense")), area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    if app.recent.is_empty() {
        super::render_placeholder(
            f,
            area,
            "Recent Expenses",
            "No expenses yet. Add your first expense!",
        );
        return;
    }
    render_expense_table(f, area, "Recent Expenses".into(), &app.recent, 0, None);
}

//! Entry form view
//!
//! Description and amount inputs, the income/expense selector, the category
//! picker, inline hints and the submit prompt.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::BudgetView;
use crate::models::EntryType;
use crate::tui::app::{App, Focus};

/// Render the entry form
pub fn render(frame: &mut Frame, app: &App, view: &BudgetView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New entry ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 6])
        .split(inner);

    let report = &view.validation;
    frame.render_widget(
        app.description.widget(
            app.focus == Focus::Description,
            report.description_error_visible,
        ),
        rows[0],
    );
    frame.render_widget(
        app.amount
            .widget(app.focus == Focus::Amount, report.amount_error_visible),
        rows[1],
    );
    frame.render_widget(Paragraph::new(type_line(app)), rows[2]);
    frame.render_widget(Paragraph::new(category_line(app, view)), rows[3]);
    frame.render_widget(Paragraph::new(hint_line(view)), rows[4]);

    if report.submit_visible {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[ Enter: add to list ]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))),
            rows[5],
        );
    }
}

fn label(text: &str, focused: bool) -> Span<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(text, style)
}

fn type_line(app: &App) -> Line<'static> {
    let focused = app.focus == Focus::EntryType;
    let selector = app.budget.form().selector();

    let mut spans = vec![label("Type", focused), Span::raw(": ")];
    for entry_type in [EntryType::Income, EntryType::Expense] {
        let mark = if selector.is_checked(entry_type) {
            "(x)"
        } else {
            "( )"
        };
        let mut style = Style::default();
        if focused && app.type_cursor == entry_type {
            style = style.fg(Color::Black).bg(Color::Cyan);
        }
        spans.push(Span::styled(format!("{} {}", mark, entry_type), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn category_line(app: &App, view: &BudgetView) -> Line<'static> {
    let focused = app.focus == Focus::Category;
    let text = view
        .filter_options
        .iter()
        .find(|o| o.value == view.selected_category)
        .map(|o| o.text.clone())
        .unwrap_or_else(|| view.selected_category.clone());

    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        label("Category", focused),
        Span::raw(": "),
        Span::styled(format!("< {} >", text), style),
    ])
}

fn hint_line(view: &BudgetView) -> Line<'static> {
    let report = &view.validation;
    let mut hints = Vec::new();
    if report.description_error_visible {
        hints.push("Description: letters and spaces, at least two");
    }
    if report.amount_error_visible {
        hints.push("Amount: positive number up to 1000000000, at most two decimals");
    }
    Line::from(Span::styled(
        hints.join("  "),
        Style::default().fg(Color::Red),
    ))
}

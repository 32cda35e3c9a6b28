//! TUI views
//!
//! One page: header, entry form, the two lists, remaining balance and the
//! status bar, with the notification drawn on top.

pub mod budget;
pub mod form;
pub mod lists;
pub mod status_bar;

use ratatui::Frame;

use crate::models::EntryType;

use super::app::App;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the whole page
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let view = app.view();

    budget::render_header(frame, &view, layout.header);
    form::render(frame, app, &view, layout.form);
    lists::render(frame, app, EntryType::Income, &view.income_lines, layout.incomes);
    lists::render(frame, app, EntryType::Expense, &view.expense_lines, layout.expenses);
    budget::render_remaining(
        frame,
        &view,
        &app.budget.settings().currency_suffix,
        layout.remaining,
    );
    status_bar::render(frame, app, &view, layout.status_bar);

    if let Some(message) = &view.notification {
        let area = notification_area(frame.area(), message);
        frame.render_widget(NotificationWidget::new(message), area);
    }
}

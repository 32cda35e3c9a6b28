//! Status bar view
//!
//! Income and expense totals, the last status message and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::BudgetView;
use crate::tui::app::{App, Focus};

/// Key hints for the focused control
pub fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Description | Focus::Amount => "Tab: next  Enter: add  Esc: quit",
        Focus::EntryType => "←/→: move  Space: toggle  i/e: pick  Enter: add",
        Focus::Category => "←/→: change category  Tab: next",
        Focus::Incomes | Focus::Expenses => "j/k: move  d: remove  h/l: switch list  q: quit",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, view: &BudgetView, area: Rect) {
    let suffix = &app.budget.settings().currency_suffix;
    let mut spans = vec![
        Span::styled(" In: ", Style::default().fg(Color::White)),
        Span::styled(
            view.totals.total_income.format_with_suffix(suffix),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" │ "),
        Span::styled("Out: ", Style::default().fg(Color::White)),
        Span::styled(
            view.totals.total_expense.format_with_suffix(suffix),
            Style::default().fg(Color::Red),
        ),
    ];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        key_hints(app.focus),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

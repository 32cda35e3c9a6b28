//! Income and expense lists
//!
//! Renders the filtered list lines; the highlighted row is the one `d`
//! removes.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::display::ListLine;
use crate::models::EntryType;
use crate::tui::app::App;

/// Render one list
pub fn render(frame: &mut Frame, app: &App, entry_type: EntryType, lines: &[ListLine], area: Rect) {
    let focused = app.focus.list() == Some(entry_type);
    let title = match entry_type {
        EntryType::Income => format!(" Incomes ({}) ", lines.len()),
        EntryType::Expense => format!(" Expenses ({}) ", lines.len()),
    };
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if lines.is_empty() {
        let empty = List::new([ListItem::new("  (no items)")])
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| ListItem::new(line.text.clone()))
        .collect();

    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_row(entry_type).min(lines.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

//! Header and remaining balance
//!
//! The month heading on top and the remaining balance below the lists,
//! coloured by its tone.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::BudgetView;
use crate::services::BalanceTone;

/// Colour for the remaining balance
pub fn tone_color(tone: BalanceTone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}

/// Render the month heading
pub fn render_header(frame: &mut Frame, view: &BudgetView, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Budget ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(view.month_label.clone(), Style::default().fg(Color::White)),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Render the remaining balance
pub fn render_remaining(frame: &mut Frame, view: &BudgetView, currency_suffix: &str, area: Rect) {
    let color = tone_color(view.tone);
    let line = Line::from(vec![
        Span::styled("Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} {}", view.remaining_text, currency_suffix),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

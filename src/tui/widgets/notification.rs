//! Toast notification widget
//!
//! Draws the transient "Added to list!" message over the top-right corner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Widget for rendering a notification message
pub struct NotificationWidget<'a> {
    message: &'a str,
    color: Color,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            color: Color::Green,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.color));

        Paragraph::new(self.message)
            .style(Style::default().fg(self.color).add_modifier(Modifier::BOLD))
            .block(block)
            .render(area, buf);
    }
}

/// Box in the top-right corner of `area` sized for `message`
pub fn notification_area(area: Rect, message: &str) -> Rect {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + 1.min(area.height.saturating_sub(height)),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_fits_message() {
        let area = notification_area(Rect::new(0, 0, 80, 24), "Added to list!");
        assert_eq!(area.width, 18);
        assert_eq!(area.height, 3);
        assert_eq!(area.x + area.width, 79);
    }

    #[test]
    fn test_area_clamped_to_small_terminal() {
        let outer = Rect::new(0, 0, 10, 2);
        let area = notification_area(outer, "Added to list!");
        assert!(area.width <= outer.width);
        assert!(area.height <= outer.height);
    }

    #[test]
    fn test_render_message() {
        let area = Rect::new(0, 0, 18, 3);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new("Added to list!").render(area, &mut buf);

        let middle: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(middle.contains("Added to list!"));
    }
}

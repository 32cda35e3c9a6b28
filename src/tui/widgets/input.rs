//! Text input widget
//!
//! A single-line text field. The cursor counts characters, not bytes, so
//! "å", "ä" and "ö" edit like any other letter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    pub label: String,
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.char_count();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Widget view of this input
    pub fn widget(&self, focused: bool, invalid: bool) -> TextInputWidget<'_> {
        TextInputWidget {
            input: self,
            focused,
            invalid,
        }
    }
}

/// Renders a `TextInput` on one line: label, text, cursor
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    focused: bool,
    invalid: bool,
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let label_width = if input.label.is_empty() {
            0
        } else {
            input.label.chars().count() as u16 + 2
        };
        let input_start = area.x + label_width;

        if label_width > 0 {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label_line = Line::from(vec![
                Span::styled(input.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let (text, style) = if input.content.is_empty() && !self.focused {
            (input.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.invalid {
            (input.content.as_str(), Style::default().fg(Color::Red))
        } else {
            (input.content.as_str(), Style::default().fg(Color::White))
        };
        let text_width = area.width.saturating_sub(label_width) as usize;
        buf.set_stringn(input_start, area.y, text, text_width, style);

        if self.focused {
            let cursor_x = input_start + input.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = input.content.chars().nth(input.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

//! Layout definitions for the TUI
//!
//! Header, entry form, the two lists side by side, the remaining balance
//! and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions of the budget page
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub incomes: Rect,
    pub expenses: Rect,
    pub remaining: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(8), // Form
                Constraint::Min(4),    // Lists
                Constraint::Length(3), // Remaining
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            form: vertical[1],
            incomes: lists[0],
            expenses: lists[1],
            remaining: vertical[3],
            status_bar: vertical[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_cover_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.form.height, 8);
        assert_eq!(layout.remaining.height, 3);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.incomes.height, 15);
        assert_eq!(layout.incomes.width + layout.expenses.width, 80);
    }
}

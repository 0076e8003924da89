//! Layout definitions for the TUI
//!
//! The dashboard stacks a header, the financial status row, the metric
//! cards and the three lists above a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct AppLayout {
    /// Clock, IP and background line
    pub header: Rect,
    /// Income and totals panel
    pub status: Rect,
    /// FREE / USED / QUARTERLY / ANNUAL cards
    pub metrics: [Rect; 4],
    /// Expense list
    pub expenses: Rect,
    /// Active goals with progress bars
    pub goals: Rect,
    /// Completed goals
    pub completed: Rect,
    /// Key hints and status messages
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Financial status
                Constraint::Length(4), // Metric cards
                Constraint::Min(6),    // Lists
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(vertical[2]);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[3]);

        let goal_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(lists[1]);

        Self {
            header: vertical[0],
            status: vertical[1],
            metrics: [cards[0], cards[1], cards[2], cards[3]],
            expenses: lists[0],
            goals: goal_column[0],
            completed: goal_column[1],
            status_bar: vertical[4],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect, shrunk to fit `r`
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.y, 39);
        assert!(layout.metrics.iter().all(|r| r.height == 4));
        assert_eq!(layout.expenses.y, layout.goals.y);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 7, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.y, 1);
    }
}

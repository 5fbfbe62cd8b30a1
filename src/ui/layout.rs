//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the new-task input row, borders included
const INPUT_HEIGHT: u16 = 3;

/// Screen regions of the board, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub input: Rect,
    pub pending: Rect,
    pub completed: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Input on top, pending zone, completed zone, then a one-line status bar.
    ///
    /// Zones are stacked vertically; the pending zone gets the larger share.
    #[must_use]
    pub fn board_layout(area: Rect) -> BoardLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Percentage(55),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        BoardLayout {
            input: chunks[0],
            pending: chunks[1],
            completed: chunks[2],
            status: chunks[3],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
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

    /// Dialog size in percent of the screen, larger on small terminals
    #[must_use]
    pub fn dialog_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 70 };
        let height = if screen_height < 30 { 90 } else { 70 };
        (width, height)
    }
}

//! Status bar component

use crate::constants::{HINT_DRAGGING, HINT_EDITING, HINT_INPUT, HINT_NORMAL};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// What the user is doing right now, which decides the hints shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    Normal,
    Input,
    Editing,
    Dragging,
}

pub struct StatusBar;

impl StatusBar {
    pub fn text(mode: StatusMode, pending: usize, completed: usize) -> String {
        let hint = match mode {
            StatusMode::Normal => HINT_NORMAL,
            StatusMode::Input => HINT_INPUT,
            StatusMode::Editing => HINT_EDITING,
            StatusMode::Dragging => HINT_DRAGGING,
        };
        format!("{} pending • {} done │ {}", pending, completed, hint)
    }

    pub fn render(f: &mut Frame, area: Rect, mode: StatusMode, pending: usize, completed: usize) {
        let status_color = match mode {
            StatusMode::Dragging | StatusMode::Editing => Color::Yellow,
            StatusMode::Input => Color::Cyan,
            StatusMode::Normal => Color::Gray,
        };

        let status_bar = Paragraph::new(Self::text(mode, pending, completed))
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}

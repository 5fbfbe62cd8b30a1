use crate::constants::{ADD_BUTTON_LABEL, ADD_BUTTON_WIDTH, INPUT_PLACEHOLDER};
use crate::entities::ZoneId;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The "new task" text field with its Add button
#[derive(Debug, Default)]
pub struct InputComponent {
    pub draft: String,
    pub focused: bool,
    area: Rect,
}

impl InputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, draft: &str) {
        if self.draft != draft {
            self.draft = draft.to_string();
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(ADD_BUTTON_WIDTH)]).split(area);
        (chunks[0], chunks[1])
    }

    fn contains(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::AddTask,
            KeyCode::Backspace => Action::DraftBackspace,
            KeyCode::Esc => Action::SetFocus(Focus::Zone(ZoneId::Pending)),
            KeyCode::Tab => Action::NextFocus,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::DraftInput(c),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }

        let (field, button) = Self::split(self.area);
        if Self::contains(button, mouse.column, mouse.row) {
            Action::AddTask
        } else if Self::contains(field, mouse.column, mouse.row) {
            Action::SetFocus(Focus::Input)
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let (field_area, button_area) = Self::split(rect);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" New task ")
            .border_style(border_style);
        let inner = block.inner(field_area);

        let field = if self.draft.is_empty() {
            Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            // Keep the end of long drafts visible
            let visible = inner.width.saturating_sub(1) as usize;
            let skip = self.draft.chars().count().saturating_sub(visible);
            Paragraph::new(self.draft.chars().skip(skip).collect::<String>()).style(Style::default().fg(Color::White))
        };
        f.render_widget(field.block(block), field_area);

        if self.focused {
            let typed = self.draft.chars().count().min(inner.width.saturating_sub(1) as usize) as u16;
            f.set_cursor_position(Position::new(inner.x + typed, inner.y));
        }

        let button = Paragraph::new(ADD_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, button_area);
    }
}

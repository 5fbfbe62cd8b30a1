use crate::entities::{Task, TaskId};
use crate::icons::IconService;
use crate::ui::core::{Action, DragSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Cells taken by one control slot, e.g. ` [✔] `. Fits a glyph up to two cells wide.
const BUTTON_SLOT_WIDTH: u16 = 5;
/// Both controls, right-aligned: primary then edit
pub const CONTROLS_WIDTH: u16 = BUTTON_SLOT_WIDTH * 2;

/// Part of a row hit by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemHit {
    /// Text area; pressing here starts a drag
    Body,
    /// Complete (pending) or delete (completed)
    Primary,
    Edit,
}

/// One task row: status, text or inline editor, and its two controls
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: Task,
    pub editing: bool,
    pub icons: IconService,
}

impl DragSource for TaskItem {
    fn drag_id(&self) -> Option<TaskId> {
        if self.task.completed || self.editing {
            None
        } else {
            Some(self.task.id)
        }
    }
}

impl TaskItem {
    pub fn new(task: Task, editing: bool, icons: IconService) -> Self {
        Self { task, editing, icons }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    /// The primary button completes a pending task and deletes a completed one
    pub fn primary_action(&self) -> Action {
        if self.task.completed {
            Action::DeleteTask(self.task.id)
        } else {
            Action::CompleteTask(self.task.id)
        }
    }

    /// Completed tasks can't be edited, so their edit button does nothing
    pub fn edit_action(&self) -> Action {
        if self.task.completed {
            Action::None
        } else {
            Action::EnterEditMode(self.task.id)
        }
    }

    /// Which part of the row the cell `x` (relative to the row start) falls in
    pub fn hit_test(x: u16, width: u16) -> ItemHit {
        if width < CONTROLS_WIDTH || x < width - CONTROLS_WIDTH {
            ItemHit::Body
        } else if x < width - BUTTON_SLOT_WIDTH {
            ItemHit::Primary
        } else {
            ItemHit::Edit
        }
    }

    /// Keys while this row is the inline editor. Every keystroke is committed at once.
    pub fn handle_edit_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.task.text.clone();
                text.push(c);
                Action::EditTask { id: self.task.id, text }
            }
            KeyCode::Backspace => {
                let mut text = self.task.text.clone();
                if text.pop().is_some() {
                    Action::EditTask { id: self.task.id, text }
                } else {
                    Action::None
                }
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => Action::ExitEditMode,
            _ => Action::None,
        }
    }

    pub fn render(&self, selected: bool, grabbed: bool, width: u16) -> Line<'static> {
        let marker = if grabbed {
            self.icons.drag_grabbed()
        } else if self.drag_id().is_some() {
            self.icons.drag_handle()
        } else {
            ""
        };
        let status_icon = if self.task.completed {
            self.icons.task_completed()
        } else {
            self.icons.task_pending()
        };
        let prefix = format!("{} {} ", pad_to_width(marker, 2), status_icon);

        let prefix_width = Span::raw(prefix.as_str()).width();
        let text_width = (width.saturating_sub(CONTROLS_WIDTH) as usize).saturating_sub(prefix_width);
        let mut line_spans = Vec::new();

        line_spans.push(Span::styled(prefix, Style::default().fg(Color::DarkGray)));

        if self.editing {
            // Inline editor with a block cursor after the text
            let visible = fit_width(&self.task.text, text_width.saturating_sub(1));
            line_spans.push(Span::styled(
                visible.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
            ));
            line_spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            let padding = text_width.saturating_sub(Span::raw(visible).width() + 1);
            line_spans.push(Span::raw(" ".repeat(padding)));
        } else {
            let visible = fit_width(&self.task.text, text_width);
            let content_style = if grabbed {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if self.task.completed {
                Style::default().fg(Color::Green).add_modifier(Modifier::CROSSED_OUT)
            } else if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            line_spans.push(Span::styled(visible.to_string(), content_style));
            let padding = text_width.saturating_sub(Span::raw(visible).width());
            line_spans.push(Span::raw(" ".repeat(padding)));
        }

        let (primary_icon, primary_color) = if self.task.completed {
            (self.icons.delete_button(), Color::Red)
        } else {
            (self.icons.complete_button(), Color::Green)
        };
        line_spans.push(Span::styled(button_slot(primary_icon), Style::default().fg(primary_color)));

        let edit_style = if self.task.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan)
        };
        line_spans.push(Span::styled(button_slot(self.icons.edit_button()), edit_style));

        Line::from(line_spans)
    }
}

/// `text` followed by spaces up to `width` terminal cells
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(Span::raw(text).width());
    format!("{}{}", text, " ".repeat(padding))
}

/// Longest prefix of `text` that fits in `max` terminal cells
fn fit_width(text: &str, max: usize) -> &str {
    let mut end = 0;
    for (index, c) in text.char_indices() {
        let next = index + c.len_utf8();
        if Span::raw(&text[..next]).width() > max {
            break;
        }
        end = next;
    }
    &text[..end]
}

/// One control drawn as ` [glyph]`, padded to a full slot
fn button_slot(icon: &str) -> String {
    pad_to_width(&format!(" [{}]", icon), BUTTON_SLOT_WIDTH as usize)
}

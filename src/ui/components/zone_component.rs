//! A drop zone: a titled box listing the tasks of one collection.
//!
//! Zones hold no transition logic. They report clicks and key presses as
//! actions and answer "is this cell mine?" for drops.

use crate::entities::{Task, TaskId, ZoneId};
use crate::icons::IconService;
use crate::ui::components::task_item_component::{ItemHit, TaskItem};
use crate::ui::core::{Action, Component, DragSource, DropTarget};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct ZoneComponent {
    pub id: ZoneId,
    pub title: String,
    pub items: Vec<TaskItem>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    /// A drag is currently hovering this zone
    pub hovered: bool,
    pub grabbed: Option<TaskId>,
    pub icons: IconService,
    area: Rect,
}

impl ZoneComponent {
    pub fn new(id: ZoneId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: false,
            hovered: false,
            grabbed: None,
            icons: IconService::default(),
            area: Rect::default(),
        }
    }

    pub fn update_data(
        &mut self,
        tasks: &[Task],
        editing: Option<TaskId>,
        grabbed: Option<TaskId>,
        hovered: bool,
        icons: &IconService,
    ) {
        self.items = tasks
            .iter()
            .map(|task| TaskItem::new(task.clone(), editing == Some(task.id), icons.clone()))
            .collect();
        self.grabbed = grabbed;
        self.hovered = hovered;
        self.icons = icons.clone();
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_item(&self) -> Option<&TaskItem> {
        self.items.get(self.selected_index)
    }

    pub fn item(&self, id: TaskId) -> Option<&TaskItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.update_list_state();
    }

    pub fn select_id(&mut self, id: TaskId) {
        if let Some(index) = self.items.iter().position(|item| item.id() == id) {
            self.select(index);
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
            self.update_list_state();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.items.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }

    /// Area last drawn, used for hit-testing
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Set the drawn area without rendering (tests and layout pre-pass)
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    fn inner_area(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.area)
    }

    /// Row index and control under a cell, if the cell is on an item
    pub fn item_at(&self, column: u16, row: u16) -> Option<(usize, ItemHit)> {
        let inner = self.inner_area();
        let inside = column >= inner.x
            && column < inner.x + inner.width
            && row >= inner.y
            && row < inner.y + inner.height;
        if !inside {
            return None;
        }

        let index = self.list_state.offset() + (row - inner.y) as usize;
        if index >= self.items.len() {
            return None;
        }
        Some((index, TaskItem::hit_test(column - inner.x, inner.width)))
    }

    fn border_style(&self) -> Style {
        if self.hovered {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl DropTarget for ZoneComponent {
    fn zone_id(&self) -> ZoneId {
        self.id
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }
}

impl Component for ZoneComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Char(' ') => match self.selected_item().and_then(|item| item.drag_id()) {
                Some(id) => Action::DragStart {
                    id,
                    over: Some(self.id),
                },
                None => Action::None,
            },
            KeyCode::Char('c') => self
                .selected_item()
                .map(TaskItem::primary_action)
                .unwrap_or(Action::None),
            KeyCode::Char('d') => match self.selected_item() {
                Some(item) if item.task.completed => item.primary_action(),
                _ => Action::None,
            },
            KeyCode::Char('e') => self
                .selected_item()
                .map(TaskItem::edit_action)
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.contains(mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((index, hit)) = self.item_at(mouse.column, mouse.row) else {
                    return Action::None;
                };
                let item = &self.items[index];
                match hit {
                    // Controls act on click and never start a drag
                    ItemHit::Primary => item.primary_action(),
                    ItemHit::Edit => item.edit_action(),
                    ItemHit::Body => match item.drag_id() {
                        Some(id) => Action::DragStart {
                            id,
                            over: Some(self.id),
                        },
                        None => Action::Select { zone: self.id, index },
                    },
                }
            }
            MouseEventKind::ScrollUp if !self.items.is_empty() => Action::Select {
                zone: self.id,
                index: self.selected_index.saturating_sub(1),
            },
            MouseEventKind::ScrollDown if !self.items.is_empty() => Action::Select {
                zone: self.id,
                index: (self.selected_index + 1).min(self.items.len() - 1),
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let mut title_spans = vec![Span::raw(format!(" {} ({}) ", self.title, self.items.len()))];
        if self.hovered {
            title_spans.push(Span::styled(
                format!("{} ", self.icons.drop_here()),
                Style::default().fg(Color::Yellow),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(self.border_style());

        if self.items.is_empty() {
            let placeholder = if self.hovered {
                "Drop here"
            } else {
                match self.id {
                    ZoneId::Pending => "Nothing to do",
                    ZoneId::Completed => "Nothing completed yet",
                }
            };
            let paragraph = Paragraph::new(placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, rect);
            return;
        }

        let width = block.inner(rect).width;
        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let selected = self.focused && index == self.selected_index;
                let grabbed = self.grabbed == Some(item.id());
                ListItem::new(item.render(selected, grabbed, width))
            })
            .collect();

        let highlight_style = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let list = List::new(list_items).block(block).highlight_style(highlight_style);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

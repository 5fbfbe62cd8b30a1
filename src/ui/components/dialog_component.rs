//! Modal overlays: key help and the in-memory log viewer

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
NEW TASK
--------
a / i       Focus the input
Enter       Add the typed task (blank input is ignored)
Tab         Move focus: input → tasks → completed

TASKS
-----
j/k ↑/↓     Select
c           Complete (pending) or delete (completed)
d           Delete a completed task
e           Edit the selected pending task inline
            Enter/Esc leaves edit mode, changes are kept

DRAG AND DROP
-------------
Space       Grab the selected pending task
←/→ Tab     Choose the zone to drop on
Space/Enter Drop
Esc         Cancel the drag
Mouse       Drag a task body onto the other zone
            Completed tasks drag back onto the task list

GENERAL
-------
t           Cycle icon theme
G           Show logs
?           Toggle this help
q / Ctrl+C  Quit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}

#[derive(Debug, Default)]
pub struct DialogComponent {
    pub dialog: Option<DialogType>,
    pub scroll_offset: u16,
    pub logs: Vec<String>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn show(&mut self, dialog: DialogType) {
        self.dialog = Some(dialog);
        self.scroll_offset = 0;
    }

    pub fn hide(&mut self) {
        self.dialog = None;
        self.scroll_offset = 0;
    }

    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn close_action(&self) -> Action {
        match self.dialog {
            Some(DialogType::Help) => Action::ShowHelp(false),
            Some(DialogType::Logs) => Action::ShowLogs(false),
            None => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (self.dialog, key.code) {
            (None, _) => Action::None,
            (_, KeyCode::Esc | KeyCode::Char('q')) => self.close_action(),
            (Some(DialogType::Help), KeyCode::Char('?')) => self.close_action(),
            (Some(DialogType::Logs), KeyCode::Char('G')) => self.close_action(),
            (_, KeyCode::Up | KeyCode::Char('k')) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            (_, KeyCode::Home) => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog) = self.dialog else {
            return;
        };

        let (width, height) = LayoutManager::dialog_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, lines): (&str, Vec<Line>) = match dialog {
            DialogType::Help => (DIALOG_TITLE_HELP, HELP_TEXT.lines().map(Line::from).collect()),
            DialogType::Logs if self.logs.is_empty() => (DIALOG_TITLE_LOGS, vec![Line::from("No logs yet")]),
            DialogType::Logs => (
                DIALOG_TITLE_LOGS,
                self.logs.iter().map(|entry| Line::from(entry.clone())).collect(),
            ),
        };

        // Keep the last page reachable but never scroll past it
        let visible = area.height.saturating_sub(2);
        let max_scroll = (lines.len() as u16).saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));

        f.render_widget(paragraph, area);
    }
}

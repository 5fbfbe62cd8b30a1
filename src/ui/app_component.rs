use crate::board::{Board, BoardEvent};
use crate::config::Config;
use crate::entities::{TaskId, ZoneId};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{
    DialogComponent, DialogType, InputComponent, ItemHit, StatusBar, StatusMode, ZoneComponent,
};
use crate::ui::core::{dnd, Action, Component, DragState, DropTarget, EventType, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// The board screen: owns the task board and routes terminal input to it.
///
/// Components only turn input into [`Action`]s; every state change goes
/// through [`AppComponent::handle_app_action`].
pub struct AppComponent {
    // Component composition
    input: InputComponent,
    pending: ZoneComponent,
    completed: ZoneComponent,
    dialog: DialogComponent,

    // Application state
    board: Board,
    board_events: mpsc::UnboundedReceiver<BoardEvent>,
    drag: DragState,
    focus: Focus,

    // Services
    icons: IconService,
    logger: Logger,

    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let mut board = Board::new();
        let board_events = board.subscribe();

        let mut app = Self {
            input: InputComponent::new(),
            pending: ZoneComponent::new(ZoneId::Pending, config.ui.pending_title.clone()),
            completed: ZoneComponent::new(ZoneId::Completed, config.ui.completed_title.clone()),
            dialog: DialogComponent::new(),
            board,
            board_events,
            drag: DragState::new(),
            focus: Focus::default(),
            icons: IconService::new(config.ui.icon_theme),
            logger,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn dialog(&self) -> Option<DialogType> {
        self.dialog.dialog
    }

    pub fn zone(&self, id: ZoneId) -> &ZoneComponent {
        match id {
            ZoneId::Pending => &self.pending,
            ZoneId::Completed => &self.completed,
        }
    }

    fn zone_mut(&mut self, id: ZoneId) -> &mut ZoneComponent {
        match id {
            ZoneId::Pending => &mut self.pending,
            ZoneId::Completed => &mut self.completed,
        }
    }

    /// Assign screen areas without drawing, so mouse hit-testing works before the first frame
    pub fn layout(&mut self, area: Rect) {
        let layout = LayoutManager::board_layout(area);
        self.input.set_area(layout.input);
        self.pending.set_area(layout.pending);
        self.completed.set_area(layout.completed);
    }

    pub fn status_mode(&self) -> StatusMode {
        if self.drag.is_dragging() {
            StatusMode::Dragging
        } else if self.board.editing().is_some() {
            StatusMode::Editing
        } else if self.focus == Focus::Input {
            StatusMode::Input
        } else {
            StatusMode::Normal
        }
    }

    /// Route one terminal event and apply the resulting action. Returns whether a redraw is needed.
    pub fn handle_event(&mut self, event: EventType) -> bool {
        let action = match event {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) => return true,
            EventType::Tick | EventType::Other => return false,
        };

        self.handle_app_action(action);
        true
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.drag.is_dragging() {
            return self.handle_drag_key(key);
        }

        if let Some(id) = self.board.editing() {
            if let Some(item) = self.pending.item(id) {
                return item.handle_edit_key(key);
            }
        }

        let action = match self.focus {
            Focus::Input => return self.input.handle_key_events(key),
            Focus::Zone(zone) => self.zone_mut(zone).handle_key_events(key),
        };

        if action == Action::None {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    /// Keyboard drag: toggle the hovered zone, then drop or cancel
    fn handle_drag_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h' | 'j' | 'k' | 'l') => {
                let current = self.drag.over().unwrap_or(ZoneId::Pending);
                Action::DragOver(Some(current.other()))
            }
            KeyCode::Char(' ') | KeyCode::Enter => Action::DragEnd,
            KeyCode::Esc => Action::DragCancel,
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('a' | 'i') => Action::SetFocus(Focus::Input),
            KeyCode::Tab => Action::NextFocus,
            KeyCode::Left | KeyCode::Char('h') => Action::SetFocus(Focus::Zone(ZoneId::Pending)),
            KeyCode::Right | KeyCode::Char('l') => Action::SetFocus(Focus::Zone(ZoneId::Completed)),
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('t') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }

        match mouse.kind {
            // A keyboard grab owns the board until it is dropped or cancelled
            MouseEventKind::Down(MouseButton::Left) if self.drag.is_dragging() => Action::None,
            MouseEventKind::Down(MouseButton::Left) => {
                // Clicking anywhere except the row being edited takes focus away from it
                if let Some(id) = self.board.editing() {
                    if !self.is_editing_row(id, mouse) {
                        self.handle_app_action(Action::ExitEditMode);
                    }
                }

                let action = self.input.handle_mouse_events(mouse);
                if action != Action::None {
                    return action;
                }
                let action = self.pending.handle_mouse_events(mouse);
                if action != Action::None {
                    return action;
                }
                self.completed.handle_mouse_events(mouse)
            }
            MouseEventKind::Drag(MouseButton::Left) if self.drag.is_dragging() => {
                Action::DragOver(self.drop_target_at(mouse.column, mouse.row))
            }
            MouseEventKind::Up(MouseButton::Left) if self.drag.is_dragging() => {
                self.drag.hover(self.drop_target_at(mouse.column, mouse.row));
                Action::DragEnd
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let action = self.pending.handle_mouse_events(mouse);
                if action != Action::None {
                    return action;
                }
                self.completed.handle_mouse_events(mouse)
            }
            _ => Action::None,
        }
    }

    fn is_editing_row(&self, id: TaskId, mouse: MouseEvent) -> bool {
        match self.pending.item_at(mouse.column, mouse.row) {
            Some((index, ItemHit::Body)) => self.pending.items.get(index).map(|item| item.id()) == Some(id),
            _ => false,
        }
    }

    fn drop_target_at(&self, column: u16, row: u16) -> Option<ZoneId> {
        let targets: [&dyn DropTarget; 2] = [&self.pending, &self.completed];
        dnd::target_at(&targets, column, row)
    }

    /// Apply an action to the board and the UI state
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::DraftInput(c) => {
                self.focus = Focus::Input;
                self.board.push_draft_char(c);
            }
            Action::DraftBackspace => {
                self.board.pop_draft_char();
            }
            Action::AddTask => {
                if self.board.add_task().is_none() {
                    log::debug!("Add ignored: blank input");
                }
            }
            Action::CompleteTask(id) => {
                self.abandon_drag_of(id);
                self.board.complete_task(id);
            }
            Action::DeleteTask(id) => {
                self.abandon_drag_of(id);
                self.board.delete_task(id);
            }
            Action::EnterEditMode(id) => {
                self.abandon_drag_of(id);
                if self.board.set_editing(Some(id)) {
                    self.focus = Focus::Zone(ZoneId::Pending);
                    self.sync_component_data();
                    self.pending.select_id(id);
                }
            }
            Action::ExitEditMode => {
                self.board.set_editing(None);
            }
            Action::EditTask { id, text } => {
                self.board.edit_task(id, text);
            }
            Action::DragStart { id, over } => self.start_drag(id, over),
            Action::DragOver(over) => self.drag.hover(over),
            Action::DragEnd => self.finish_drag(),
            Action::DragCancel => {
                if let Some(end) = self.drag.cancel() {
                    self.logger.log(format!("Drag of {} cancelled", end.active));
                }
            }
            Action::SetFocus(focus) => self.set_focus(focus),
            Action::NextFocus => self.set_focus(self.focus.next()),
            Action::SelectNext => {
                if let Focus::Zone(zone) = self.focus {
                    self.zone_mut(zone).select_next();
                }
            }
            Action::SelectPrevious => {
                if let Focus::Zone(zone) = self.focus {
                    self.zone_mut(zone).select_previous();
                }
            }
            Action::Select { zone, index } => {
                self.set_focus(Focus::Zone(zone));
                self.zone_mut(zone).select(index);
            }
            Action::ShowHelp(show) => {
                if show {
                    self.dialog.show(DialogType::Help);
                } else {
                    self.dialog.hide();
                }
            }
            Action::ShowLogs(show) => {
                if show {
                    self.dialog.update_logs(self.logger.get_logs());
                    self.dialog.show(DialogType::Logs);
                } else {
                    self.dialog.hide();
                }
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icon theme: {:?}", self.icons.theme()));
            }
            Action::Quit => {
                self.logger.log("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }

        self.process_board_events();
        self.sync_component_data();
    }

    fn start_drag(&mut self, id: TaskId, over: Option<ZoneId>) {
        let Some(source) = self.pending.item(id).or_else(|| self.completed.item(id)) else {
            return;
        };

        if self.drag.start(source, over) {
            if let Some((zone, _)) = self.board.find(id) {
                self.focus = Focus::Zone(zone);
                self.zone_mut(zone).select_id(id);
            }
            self.logger.log(format!("Dragging {}", id));
        }
    }

    /// A grabbed task that changes zone or enters edit mode can no longer be dropped
    fn abandon_drag_of(&mut self, id: TaskId) {
        if self.drag.active() == Some(id) {
            self.drag.cancel();
            self.logger.log(format!("Drag of {} cancelled", id));
        }
    }

    fn finish_drag(&mut self) {
        let Some(end) = self.drag.finish() else {
            return;
        };

        if self.board.drag_end(end.active, end.over) {
            if let Some(zone) = end.over {
                self.focus = Focus::Zone(zone);
                self.sync_component_data();
                self.zone_mut(zone).select_id(end.active);
            }
        }
    }

    /// Moving focus away from the row being edited ends edit mode
    fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus && self.board.editing().is_some() {
            self.board.set_editing(None);
        }
        self.focus = focus;
    }

    fn process_board_events(&mut self) {
        while let Ok(event) = self.board_events.try_recv() {
            let message = match event {
                BoardEvent::TaskAdded(id) => format!("Added {}", id),
                BoardEvent::TaskMoved { id, from, to } => format!("Moved {} from {} to {}", id, from, to),
                BoardEvent::TaskEdited(id) => format!("Edited {}", id),
                BoardEvent::TaskDeleted(id) => format!("Deleted {}", id),
                BoardEvent::EditingChanged(Some(id)) => format!("Editing {}", id),
                BoardEvent::EditingChanged(None) => "Left edit mode".to_string(),
                BoardEvent::DraftChanged => continue,
            };
            self.logger.log(message);
        }
    }

    /// Push board state into the components
    fn sync_component_data(&mut self) {
        let editing = self.board.editing();
        let grabbed = self.drag.active();
        let over = if self.drag.is_dragging() { self.drag.over() } else { None };

        self.pending.update_data(
            self.board.pending(),
            editing,
            grabbed,
            over == Some(ZoneId::Pending),
            &self.icons,
        );
        self.completed.update_data(
            self.board.completed(),
            editing,
            grabbed,
            over == Some(ZoneId::Completed),
            &self.icons,
        );
        self.input.update_data(self.board.draft());

        self.input.focused = self.focus == Focus::Input;
        self.pending.focused = self.focus == Focus::Zone(ZoneId::Pending);
        self.completed.focused = self.focus == Focus::Zone(ZoneId::Completed);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.route_mouse(mouse)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::board_layout(rect);

        self.input.render(f, layout.input);
        self.pending.render(f, layout.pending);
        self.completed.render(f, layout.completed);
        StatusBar::render(
            f,
            layout.status,
            self.status_mode(),
            self.board.pending().len(),
            self.board.completed().len(),
        );

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

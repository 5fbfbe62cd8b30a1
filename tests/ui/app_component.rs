use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use todozone::config::Config;
use todozone::entities::ZoneId;
use todozone::logger::Logger;
use todozone::ui::components::{DialogType, StatusMode};
use todozone::ui::core::{Action, Component, EventType, Focus};
use todozone::ui::AppComponent;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 60,
    height: 24,
};

fn new_app() -> AppComponent {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    app.layout(SCREEN);
    app
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut AppComponent, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

fn mouse(app: &mut AppComponent, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

fn pending_texts(app: &AppComponent) -> Vec<String> {
    app.board().pending().iter().map(|t| t.text.clone()).collect()
}

fn completed_texts(app: &AppComponent) -> Vec<String> {
    app.board().completed().iter().map(|t| t.text.clone()).collect()
}

/// Cell on the body of the first row of a zone
fn first_row_body(app: &AppComponent, zone: ZoneId) -> (u16, u16) {
    let area = app.zone(zone).area();
    (area.x + 3, area.y + 1)
}

/// Cell on the primary button of the first row of a zone
fn first_row_primary(app: &AppComponent, zone: ZoneId) -> (u16, u16) {
    let area = app.zone(zone).area();
    let inner_width = area.width - 2;
    (area.x + 1 + inner_width - 7, area.y + 1)
}

/// Cell on the edit button of the first row of a zone
fn first_row_edit(app: &AppComponent, zone: ZoneId) -> (u16, u16) {
    let area = app.zone(zone).area();
    (area.x + area.width - 3, area.y + 1)
}

#[test]
fn test_typing_and_adding() {
    let mut app = new_app();
    assert_eq!(app.focus(), Focus::Input);

    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");

    assert_eq!(pending_texts(&app), vec!["Buy milk", "Walk dog"]);
    assert!(app.board().completed().is_empty());
    assert_eq!(app.board().draft(), "");
}

#[test]
fn test_quit_keys_are_typed_in_input() {
    let mut app = new_app();
    type_text(&mut app, "quiet");
    assert!(!app.should_quit());
    assert_eq!(app.board().draft(), "quiet");

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_blank_input_is_ignored() {
    let mut app = new_app();
    add(&mut app, "   ");
    assert!(app.board().is_empty());
}

#[test]
fn test_keyboard_drag_scenario() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Zone(ZoneId::Pending));

    // Grab "Buy milk", hover the completed zone, drop
    press(&mut app, KeyCode::Char(' '));
    assert!(app.drag_state().is_dragging());
    assert_eq!(app.status_mode(), StatusMode::Dragging);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.drag_state().over(), Some(ZoneId::Completed));
    press(&mut app, KeyCode::Enter);

    assert!(!app.drag_state().is_dragging());
    assert_eq!(pending_texts(&app), vec!["Walk dog"]);
    assert_eq!(completed_texts(&app), vec!["Buy milk"]);
    assert!(app.board().completed()[0].completed);
    assert_eq!(app.focus(), Focus::Zone(ZoneId::Completed));

    // Primary button on the completed task deletes it
    press(&mut app, KeyCode::Char('c'));
    assert!(app.board().completed().is_empty());
    assert_eq!(pending_texts(&app), vec!["Walk dog"]);
}

#[test]
fn test_keyboard_drag_cancel_changes_nothing() {
    let mut app = new_app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Esc);

    assert!(!app.drag_state().is_dragging());
    assert_eq!(pending_texts(&app), vec!["a"]);
    assert!(app.board().completed().is_empty());
}

#[test]
fn test_drop_on_own_zone_is_noop() {
    let mut app = new_app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert_eq!(pending_texts(&app), vec!["a"]);
}

#[test]
fn test_completed_task_cannot_be_grabbed() {
    let mut app = new_app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(completed_texts(&app), vec!["a"]);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.focus(), Focus::Zone(ZoneId::Completed));
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.drag_state().is_dragging());
}

#[test]
fn test_inline_edit() {
    let mut app = new_app();
    add(&mut app, "milk");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('e'));
    let id = app.board().pending()[0].id;
    assert_eq!(app.board().editing(), Some(id));
    assert_eq!(app.status_mode(), StatusMode::Editing);

    // Each key lands in the task right away, even global shortcuts
    type_text(&mut app, "sq");
    assert_eq!(pending_texts(&app), vec!["milksq"]);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(pending_texts(&app), vec!["milks"]);
    assert!(!app.should_quit());

    // Editing blocks dragging
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.drag_state().is_dragging());
    assert_eq!(pending_texts(&app), vec!["milks "]);

    // Leaving edit mode keeps the changes
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.board().editing(), None);
    assert_eq!(pending_texts(&app), vec!["milks "]);
}

#[test]
fn test_mouse_drag_between_zones() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");

    let (column, row) = first_row_body(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert!(app.drag_state().is_dragging());

    let target = app.zone(ZoneId::Completed).area();
    let (drop_column, drop_row) = (target.x + 5, target.y + 2);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), drop_column, drop_row);
    assert_eq!(app.drag_state().over(), Some(ZoneId::Completed));
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), drop_column, drop_row);

    assert_eq!(pending_texts(&app), vec!["Walk dog"]);
    assert_eq!(completed_texts(&app), vec!["Buy milk"]);
}

#[test]
fn test_mouse_drop_outside_zones_is_noop() {
    let mut app = new_app();
    add(&mut app, "a");

    let (column, row) = first_row_body(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    // Release over the input bar
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 5, 1);

    assert!(!app.drag_state().is_dragging());
    assert_eq!(pending_texts(&app), vec!["a"]);
    assert!(app.board().completed().is_empty());
}

#[test]
fn test_mouse_click_on_buttons() {
    let mut app = new_app();
    add(&mut app, "a");

    let (column, row) = first_row_primary(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert!(!app.drag_state().is_dragging());
    assert_eq!(completed_texts(&app), vec!["a"]);

    let (column, row) = first_row_primary(&app, ZoneId::Completed);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert!(app.board().is_empty());
}

#[test]
fn test_mouse_edit_then_click_away() {
    let mut app = new_app();
    add(&mut app, "a");

    let (column, row) = first_row_edit(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert!(app.board().editing().is_some());
    assert!(!app.drag_state().is_dragging());

    type_text(&mut app, "b");
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 1);

    assert_eq!(app.board().editing(), None);
    assert_eq!(app.focus(), Focus::Input);
    assert_eq!(pending_texts(&app), vec!["ab"]);
}

#[test]
fn test_clicks_during_keyboard_grab_are_ignored() {
    let mut app = new_app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.drag_state().is_dragging());

    let (column, row) = first_row_edit(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert_eq!(app.board().editing(), None);

    let (column, row) = first_row_primary(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert_eq!(pending_texts(&app), vec!["a"]);
    assert!(app.drag_state().is_dragging());

    // The grab still drops normally afterwards
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(completed_texts(&app), vec!["a"]);
    assert!(app.board().pending().is_empty());
}

#[test]
fn test_completing_grabbed_task_ends_the_drag() {
    let mut app = new_app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    let id = app.board().pending()[0].id;

    app.handle_app_action(Action::CompleteTask(id));
    assert!(!app.drag_state().is_dragging());

    // Nothing left to drop, so the task stays completed
    press(&mut app, KeyCode::Enter);
    assert_eq!(completed_texts(&app), vec!["a"]);
    assert!(app.board().completed()[0].completed);
}

#[test]
fn test_editing_grabbed_task_ends_the_drag() {
    let mut app = new_app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    let id = app.board().pending()[0].id;

    app.handle_app_action(Action::EnterEditMode(id));
    assert!(!app.drag_state().is_dragging());
    assert_eq!(app.board().editing(), Some(id));
}

#[test]
fn test_mouse_disabled() {
    let mut config = Config::default();
    config.ui.mouse_enabled = false;
    let mut app = AppComponent::new(&config, Logger::new());
    app.layout(SCREEN);
    add(&mut app, "a");

    let (column, row) = first_row_primary(&app, ZoneId::Pending);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row);
    assert_eq!(pending_texts(&app), vec!["a"]);
}

#[test]
fn test_dialogs() {
    let mut app = new_app();
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog(), Some(DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog(), None);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog(), Some(DialogType::Logs));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog(), None);
}

#[test]
fn test_render_board() {
    let mut app = new_app();
    add(&mut app, "Buy milk");

    let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
    terminal.draw(|f| app.render(f, SCREEN)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let screen: String = (0..SCREEN.height)
        .flat_map(|y| (0..SCREEN.width).map(move |x| (x, y)))
        .map(|pos| buffer[pos].symbol().to_string())
        .collect();

    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Tasks (1)"));
    assert!(screen.contains("Completed tasks (0)"));
    assert!(screen.contains("1 pending"));
}

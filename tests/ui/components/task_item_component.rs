use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use todozone::entities::Task;
use todozone::icons::{IconService, IconTheme};
use todozone::ui::components::{ItemHit, TaskItem};
use todozone::ui::core::{Action, DragSource};

fn item(text: &str, completed: bool, editing: bool) -> TaskItem {
    let task = Task::new(text).with_completed(completed);
    TaskItem::new(task, editing, IconService::new(IconTheme::Ascii))
}

fn line_text(item: &TaskItem, width: u16) -> String {
    item.render(false, false, width)
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

#[test]
fn test_pending_item_is_draggable() {
    let item = item("Buy milk", false, false);
    assert_eq!(item.drag_id(), Some(item.id()));
}

#[test]
fn test_completed_or_editing_item_is_not_draggable() {
    assert_eq!(item("done", true, false).drag_id(), None);
    assert_eq!(item("typing", false, true).drag_id(), None);
}

#[test]
fn test_primary_button_roles() {
    let pending = item("a", false, false);
    assert_eq!(pending.primary_action(), Action::CompleteTask(pending.id()));

    let completed = item("b", true, false);
    assert_eq!(completed.primary_action(), Action::DeleteTask(completed.id()));
}

#[test]
fn test_edit_button_inert_when_completed() {
    let pending = item("a", false, false);
    assert_eq!(pending.edit_action(), Action::EnterEditMode(pending.id()));
    assert_eq!(item("b", true, false).edit_action(), Action::None);
}

#[test]
fn test_edit_keys_commit_each_keystroke() {
    let editing = item("milk", false, true);
    let id = editing.id();

    let typed = editing.handle_edit_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
    assert_eq!(
        typed,
        Action::EditTask {
            id,
            text: "milks".to_string()
        }
    );

    let erased = editing.handle_edit_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    assert_eq!(
        erased,
        Action::EditTask {
            id,
            text: "mil".to_string()
        }
    );

    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Tab] {
        assert_eq!(
            editing.handle_edit_key(KeyEvent::new(code, KeyModifiers::NONE)),
            Action::ExitEditMode
        );
    }
}

#[test]
fn test_backspace_on_empty_text_does_nothing() {
    let editing = item("", false, true);
    assert_eq!(
        editing.handle_edit_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        Action::None
    );
}

#[test]
fn test_render_shows_text_and_buttons() {
    let pending = line_text(&item("Buy milk", false, false), 40);
    assert!(pending.contains("Buy milk"));
    assert!(pending.contains("[v]"));
    assert!(pending.contains("[e]"));

    let completed = line_text(&item("Buy milk", true, false), 40);
    assert!(completed.contains("[x]"));
    assert!(completed.contains("[X]"));
}

#[test]
fn test_controls_sit_in_hit_regions() {
    let width = 40;
    let text = line_text(&item("Buy milk", false, false), width);
    let primary = text.find("[v]").unwrap() as u16;
    let edit = text.find("[e]").unwrap() as u16;

    assert_eq!(TaskItem::hit_test(primary, width), ItemHit::Primary);
    assert_eq!(TaskItem::hit_test(edit, width), ItemHit::Edit);
    assert_eq!(TaskItem::hit_test(4, width), ItemHit::Body);
}

#[test]
fn test_rows_fill_exact_width_in_every_theme() {
    let width = 40;
    for theme in [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji] {
        for (text, completed, editing) in [
            ("Buy milk", false, false),
            ("Buy milk", true, false),
            ("Buy milk", false, true),
            ("牛乳を買う、パンを買う、卵を買う、そして帰る", false, false),
        ] {
            let task = Task::new(text).with_completed(completed);
            let row = TaskItem::new(task, editing, IconService::new(theme));
            assert_eq!(row.render(false, false, width).width(), width as usize, "{:?} {:?}", theme, text);
        }
    }
}

#[test]
fn test_emoji_controls_are_drawn_inside_hit_regions() {
    let width = 40;
    let row = TaskItem::new(Task::new("Buy milk"), false, IconService::new(IconTheme::Emoji));
    let line = row.render(false, false, width);

    let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
    terminal.draw(|f| f.render_widget(line, f.area())).unwrap();
    let buffer = terminal.backend().buffer();

    let column_of = |glyph: char| {
        (0..width)
            .find(|&x| buffer[(x, 0)].symbol().starts_with(glyph))
            .unwrap()
    };
    assert_eq!(TaskItem::hit_test(column_of('✔'), width), ItemHit::Primary);
    assert_eq!(TaskItem::hit_test(column_of('✏'), width), ItemHit::Edit);
}

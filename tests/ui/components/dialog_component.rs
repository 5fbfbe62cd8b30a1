use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todozone::ui::components::{DialogComponent, DialogType};
use todozone::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_close_keys() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);

    dialog.show(DialogType::Help);
    assert!(dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::ShowHelp(false));

    dialog.show(DialogType::Logs);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::ShowLogs(false));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::ShowLogs(false));
}

#[test]
fn test_scrolling() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Help);

    dialog.handle_key_events(key(KeyCode::Down));
    dialog.handle_key_events(key(KeyCode::Down));
    assert_eq!(dialog.scroll_offset, 2);

    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.scroll_offset, 1);

    dialog.hide();
    assert_eq!(dialog.scroll_offset, 0);
}

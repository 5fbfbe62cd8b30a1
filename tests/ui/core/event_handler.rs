use todozone::ui::core::EventHandler;

#[test]
fn test_first_frame_is_due_immediately() {
    let event_handler = EventHandler::new();
    assert!(event_handler.should_render());
}

#[tokio::test]
async fn test_render_pacing() {
    let mut event_handler = EventHandler::new();
    event_handler.mark_rendered();

    // Just rendered: wait for the next frame
    assert!(!event_handler.should_render());

    tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    assert!(event_handler.should_render());
}

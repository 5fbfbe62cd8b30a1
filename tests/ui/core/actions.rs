use todozone::entities::ZoneId;
use todozone::ui::core::Focus;

#[test]
fn test_focus_tab_order() {
    let focus = Focus::default();
    assert_eq!(focus, Focus::Input);

    let focus = focus.next();
    assert_eq!(focus, Focus::Zone(ZoneId::Pending));

    let focus = focus.next();
    assert_eq!(focus, Focus::Zone(ZoneId::Completed));

    assert_eq!(focus.next(), Focus::Input);
}

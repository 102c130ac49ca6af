use super::*;

fn menu_box() -> Rect {
    Rect::new(0.0, 0.0, 320.0, 400.0)
}

#[test]
fn starts_closed() {
    assert!(!MobileMenuState::default().open);
}

#[test]
fn toggle_flips_state() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn select_while_closed_schedules_nothing() {
    let mut menu = MobileMenuState::default();
    assert_eq!(menu.select(), None);
}

#[test]
fn select_closes_after_ticket_fires() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    let ticket = menu.select().unwrap();
    assert!(menu.open, "close is deferred");
    assert!(menu.close_if_current(ticket));
    assert!(!menu.open);
}

#[test]
fn stale_ticket_is_ignored_after_reopen() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    let ticket = menu.select().unwrap();
    menu.toggle();
    menu.toggle();
    assert!(menu.open);
    assert!(!menu.close_if_current(ticket));
    assert!(menu.open);
}

#[test]
fn newer_selection_supersedes_older_ticket() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    let first = menu.select().unwrap();
    let second = menu.select().unwrap();
    assert!(!menu.close_if_current(first));
    assert!(menu.close_if_current(second));
}

#[test]
fn pointer_outside_closes_immediately() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    assert!(menu.pointer_down(500.0, 600.0, Some(menu_box())));
    assert!(!menu.open);
}

#[test]
fn pointer_inside_keeps_menu_open() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    assert!(!menu.pointer_down(100.0, 100.0, Some(menu_box())));
    assert!(menu.open);
}

#[test]
fn pointer_with_no_region_counts_as_outside() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    assert!(menu.pointer_down(0.0, 0.0, None));
}

#[test]
fn pointer_while_closed_is_noop() {
    let mut menu = MobileMenuState::default();
    assert!(!menu.pointer_down(500.0, 600.0, Some(menu_box())));
    assert!(!menu.open);
}

#[test]
fn pointer_close_invalidates_pending_ticket() {
    let mut menu = MobileMenuState::default();
    menu.toggle();
    let ticket = menu.select().unwrap();
    menu.pointer_down(999.0, 999.0, Some(menu_box()));
    menu.toggle();
    assert!(!menu.close_if_current(ticket));
    assert!(menu.open);
}

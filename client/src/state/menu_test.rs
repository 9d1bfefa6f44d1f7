use super::*;

#[test]
fn menu_starts_closed() {
    let menu = MenuState::default();
    assert!(!menu.is_open);
    assert_eq!(menu.button_label(), "Open menu");
}

#[test]
fn menu_single_toggle_opens() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(menu.is_open);
    assert_eq!(menu.button_label(), "Close menu");
}

#[test]
fn menu_double_toggle_returns_to_closed() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!menu.toggle());
    assert_eq!(menu, MenuState::default());
}

#[test]
fn menu_toggle_parity_over_many_clicks() {
    let mut menu = MenuState::default();
    for click in 1..=9 {
        menu.toggle();
        assert_eq!(menu.is_open, click % 2 == 1);
    }
}

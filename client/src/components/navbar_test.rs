use super::*;

use leptos::reactive::owner::Owner;

// =============================================================
// mobile_panel
// =============================================================

#[test]
fn closed_menu_builds_no_panel() {
    assert!(mobile_panel(MenuState::default()).is_none());
}

#[test]
fn one_toggle_builds_panel_and_second_removes_it() {
    let mut menu = MenuState::default();

    menu.toggle();
    assert!(mobile_panel(menu).is_some());

    menu.toggle();
    assert!(mobile_panel(menu).is_none());
}

// =============================================================
// Server-rendered markup
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn navbar_renders_closed_without_mobile_panel() {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| view! { <Navbar/> }.to_html());

    assert!(!html.contains(r#"id="mobile-menu""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    for link in NAV_LINKS {
        assert!(html.contains(&format!(r##"href="{}""##, link.href())));
    }
    owner.cleanup();
}

#[cfg(feature = "ssr")]
#[test]
fn open_panel_renders_every_nav_link() {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| mobile_panel(MenuState { is_open: true }).to_html());

    assert!(html.contains(r#"id="mobile-menu""#));
    for link in NAV_LINKS {
        assert!(html.contains(&format!(r##"href="{}""##, link.href())));
        assert!(html.contains(link.label));
    }
    owner.cleanup();
}

#[cfg(not(feature = "ssr"))]
#[test]
fn panel_is_built_inside_reactive_owner() {
    let owner = Owner::new();
    let built = owner.with(|| mobile_panel(MenuState { is_open: true }).is_some());
    assert!(built);
    owner.cleanup();
}

use super::*;

const SECTIONS: &[(&str, f64)] = &[("home", 0.0), ("about", 800.0), ("portfolio", 1600.0), ("contact", 2400.0)];

// =============================================================
// Scroll style
// =============================================================

#[test]
fn scrolled_only_past_fifty_pixels() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(51.0));
}

// =============================================================
// Active section
// =============================================================

#[test]
fn top_of_page_activates_first_section() {
    assert_eq!(active_section(SECTIONS, 0.0), Some("home"));
}

#[test]
fn section_activates_one_hundred_pixels_early() {
    assert_eq!(active_section(SECTIONS, 699.0), Some("home"));
    assert_eq!(active_section(SECTIONS, 700.0), Some("about"));
}

#[test]
fn last_qualifying_section_wins() {
    assert_eq!(active_section(SECTIONS, 5000.0), Some("contact"));
}

#[test]
fn no_section_qualifies_above_first_top() {
    let sections = [("hero", 500.0)];
    assert_eq!(active_section(&sections, 0.0), None);
}

#[test]
fn exactly_one_link_is_active() {
    let active = active_section(SECTIONS, 1700.0);
    let hrefs = ["#home", "#about", "#portfolio", "#contact"];
    let lit: Vec<_> = hrefs.iter().filter(|h| link_is_active(h, active)).collect();
    assert_eq!(lit, vec![&"#portfolio"]);
}

#[test]
fn no_link_active_without_section() {
    assert!(!link_is_active("#home", None));
}

#[test]
fn anchor_target_requires_hash_and_id() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_reports_scroll_lock() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(!menu.toggle());
    assert!(!menu.is_open());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.handle_document_click(false, false));
    assert!(!menu.is_open());
}

#[test]
fn clicks_inside_menu_or_hamburger_keep_it_open() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!menu.handle_document_click(true, false));
    assert!(!menu.handle_document_click(false, true));
    assert!(menu.is_open());
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut menu = MenuState::default();
    assert!(!menu.handle_document_click(false, false));
}

#[test]
fn desktop_breakpoint_closes_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!menu.handle_breakpoint(Breakpoint::Tablet));
    assert!(menu.handle_breakpoint(Breakpoint::Desktop));
    assert!(!menu.is_open());
}

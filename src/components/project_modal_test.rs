use super::*;

#[test]
fn opening_known_project_shows_its_fragment() {
    let modal = ModalController::new();
    assert!(open_project_modal(modal, "mangopets"));
    assert!(modal.is_open());
    let fragment = modal.content().unwrap();
    assert_eq!(fragment.project_id, "mangopets");
    assert_eq!(fragment.title, find_project("mangopets").unwrap().title);
    assert_eq!(fragment.live_link.as_ref().map(|l| l.label), Some("View Live Site"));
}

#[test]
fn unknown_project_leaves_modal_closed() {
    let modal = ModalController::new();
    assert!(!open_project_modal(modal, "nope"));
    assert!(!modal.is_open());
}

#[test]
fn reopening_replaces_content() {
    let modal = ModalController::new();
    open_project_modal(modal, "mangopets");
    open_project_modal(modal, "dashboard");
    assert!(modal.is_open());
    assert_eq!(modal.content().map(|f| f.project_id), Some("dashboard"));
}

#[test]
fn close_project_modal_closes() {
    let modal = ModalController::new();
    open_project_modal(modal, "phoenixstar");
    close_project_modal(modal);
    assert!(!modal.is_open());
    assert!(modal.content().is_none());
}

#[test]
fn escape_closes_only_when_open() {
    let modal = ModalController::new();
    assert!(!modal.handle_key("Escape"));
    open_project_modal(modal, "ecommerce");
    assert!(!modal.handle_key("Enter"));
    assert!(modal.handle_key("Escape"));
    assert!(!modal.is_open());
}

#[test]
fn content_clicks_do_not_close() {
    let modal = ModalController::new();
    open_project_modal(modal, "ecommerce");
    assert!(!modal.handle_click(false));
    assert!(modal.is_open());
    assert!(modal.handle_click(true));
    assert!(!modal.is_open());
}

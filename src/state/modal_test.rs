use super::*;

#[test]
fn starts_closed() {
    let modal = ModalState::<String>::default();
    assert!(!modal.is_open());
    assert_eq!(modal.content(), None);
}

#[test]
fn open_then_close_leaves_no_active_state() {
    let mut modal = ModalState::default();
    modal.open("body".to_owned());
    assert!(modal.is_open());
    assert!(modal.close());
    assert!(!modal.is_open());
}

#[test]
fn reopen_replaces_content_without_closing() {
    let mut modal = ModalState::default();
    modal.open("first");
    modal.open("second");
    assert_eq!(modal.content(), Some(&"second"));
}

#[test]
fn escape_while_closed_is_noop() {
    let mut modal = ModalState::<&str>::default();
    assert!(!modal.handle_key("Escape"));
    assert!(!modal.is_open());
}

#[test]
fn escape_while_open_closes() {
    let mut modal = ModalState::default();
    modal.open("body");
    assert!(modal.handle_key("Escape"));
    assert!(!modal.is_open());
}

#[test]
fn other_keys_are_ignored() {
    let mut modal = ModalState::default();
    modal.open("body");
    assert!(!modal.handle_key("Enter"));
    assert!(modal.is_open());
}

#[test]
fn content_click_keeps_modal_open() {
    let mut modal = ModalState::default();
    modal.open("body");
    assert!(!modal.handle_click(false));
    assert!(modal.is_open());
    assert!(modal.handle_click(true));
    assert!(!modal.is_open());
}

#[test]
fn close_when_closed_reports_no_change() {
    let mut modal = ModalState::<&str>::default();
    assert!(!modal.close());
}

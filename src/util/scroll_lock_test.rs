use super::*;

#[test]
fn lock_maps_to_overflow() {
    assert_eq!(overflow_value(true), "hidden");
    assert_eq!(overflow_value(false), "visible");
}

#[cfg(not(feature = "csr"))]
#[test]
fn set_page_scroll_locked_is_noop_but_callable() {
    set_page_scroll_locked(true);
    set_page_scroll_locked(false);
}

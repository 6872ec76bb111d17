#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::theme::ThemeManager;

#[test]
fn local_store_reads_nothing_in_native_tests() {
    assert_eq!(LocalStore.get("theme"), None);
}

#[test]
fn manager_over_local_store_defaults_to_light() {
    let mut manager = ThemeManager::load(LocalStore);
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(manager.toggle(), Theme::Dark);
}

#[test]
fn set_document_theme_is_noop_but_callable() {
    set_document_theme(Theme::Light);
    set_document_theme(Theme::Dark);
}

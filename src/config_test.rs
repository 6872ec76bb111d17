use super::*;

#[test]
fn default_relay_config_uses_placeholders() {
    let cfg = RelayConfig::default();
    assert_eq!(cfg.service_id, "service_ohlluu");
    assert_eq!(cfg.template_id, "template_ohlluu");
    assert_eq!(cfg.contact_email, "ohlluumarketing@gmail.com");
    assert!(cfg.is_placeholder());
}

#[test]
fn from_values_prefers_provided_values() {
    let cfg = RelayConfig::from_values(Some("svc"), Some("tpl"), Some("pk_live"), Some("me@site.dev"));
    assert_eq!(cfg.service_id, "svc");
    assert_eq!(cfg.template_id, "tpl");
    assert_eq!(cfg.public_key, "pk_live");
    assert_eq!(cfg.contact_email, "me@site.dev");
    assert!(!cfg.is_placeholder());
}

#[test]
fn from_values_treats_blank_as_missing() {
    let cfg = RelayConfig::from_values(Some("  "), None, Some(""), None);
    assert_eq!(cfg.service_id, DEFAULT_SERVICE_ID);
    assert!(cfg.is_placeholder());
}

#[test]
fn breakpoints_are_ordered() {
    assert!(BREAKPOINT_MOBILE_PX < BREAKPOINT_TABLET_PX);
}

#[test]
fn filter_hide_matches_normal_animation() {
    assert_eq!(FILTER_HIDE_DELAY_MS, ANIMATION_NORMAL_MS);
}

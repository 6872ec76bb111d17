use super::*;

#[test]
fn fires_on_first_intersection_only() {
    let mut trigger = OneShot::default();
    assert!(!trigger.observe(false));
    assert!(trigger.observe(true));
    assert!(trigger.has_fired());
}

#[test]
fn leaving_and_reentering_does_not_refire() {
    let mut trigger = OneShot::default();
    let fired: Vec<bool> = [true, false, true, false, true].into_iter().map(|v| trigger.observe(v)).collect();
    assert_eq!(fired, vec![true, false, false, false, false]);
}

#[test]
fn hidden_style_is_transparent_and_offset() {
    let style = RevealStyle::for_state(false);
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.transform(), "translateY(50px)");
    assert_eq!(style.transition, "all 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94)");
}

#[test]
fn revealed_style_is_opaque_and_in_place() {
    let style = RevealStyle::for_state(true);
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.transform(), "translateY(0px)");
}

use super::*;

fn settle(filter: &mut PortfolioFilter, steps: Vec<PendingStep>) {
    for step in steps {
        filter.complete(step);
    }
}

// =============================================================
// Selection
// =============================================================

#[test]
fn defaults_to_all_with_every_item_visible() {
    let filter = PortfolioFilter::new(["a", "b", "a"]);
    assert_eq!(filter.selection(), "all");
    assert!(filter.is_active_filter("all"));
    assert_eq!(filter.selected_indices(), vec![0, 1, 2]);
}

#[test]
fn selecting_b_shows_only_second_item() {
    let mut filter = PortfolioFilter::new(["a", "b", "a"]);
    let steps = filter.select("b");
    settle(&mut filter, steps);

    assert_eq!(filter.phase(0), Some(ItemPhase::Hidden));
    assert_eq!(filter.phase(1), Some(ItemPhase::Visible));
    assert_eq!(filter.phase(2), Some(ItemPhase::Hidden));
    assert_eq!(filter.selected_indices(), vec![1]);
}

#[test]
fn selecting_all_restores_every_item() {
    let mut filter = PortfolioFilter::new(["a", "b", "a"]);
    let steps = filter.select("b");
    settle(&mut filter, steps);
    let steps = filter.select("all");
    settle(&mut filter, steps);

    assert_eq!(filter.selected_indices(), vec![0, 1, 2]);
    for i in 0..3 {
        assert_eq!(filter.phase(i), Some(ItemPhase::Visible));
    }
}

#[test]
fn only_one_filter_is_active() {
    let mut filter = PortfolioFilter::new(["a", "b"]);
    filter.select("a");
    assert!(filter.is_active_filter("a"));
    assert!(!filter.is_active_filter("all"));
    assert!(!filter.is_active_filter("b"));
}

#[test]
fn unchanged_membership_schedules_nothing() {
    let mut filter = PortfolioFilter::new(["a", "b"]);
    assert!(filter.select("all").is_empty());
}

// =============================================================
// Transition steps
// =============================================================

#[test]
fn hide_fades_immediately_then_removes_after_delay() {
    let mut filter = PortfolioFilter::new(["a", "b"]);
    let steps = filter.select("b");
    assert_eq!(steps, vec![PendingStep { index: 0, token: 1, delay_ms: 300 }]);

    let style = filter.phase(0).map(ItemPhase::style);
    assert_eq!(style, Some(ItemStyle { displayed: true, opacity: 0.0, offset_px: 20.0 }));
}

#[test]
fn show_displays_immediately_then_fades_in() {
    let mut filter = PortfolioFilter::new(["a", "b"]);
    let steps = filter.select("b");
    settle(&mut filter, steps);

    let steps = filter.select("a");
    let show = steps.iter().find(|s| s.index == 0).copied();
    assert_eq!(show.map(|s| s.delay_ms), Some(10));
    assert!(filter.phase(0).is_some_and(|p| p.style().displayed));

    if let Some(step) = show {
        assert!(filter.complete(step));
    }
    assert_eq!(filter.phase(0).map(ItemPhase::style).map(|s| s.opacity), Some(1.0));
}

#[test]
fn superseded_hide_step_is_ignored() {
    let mut filter = PortfolioFilter::new(["a", "b"]);
    let hide = filter.select("b");
    let show = filter.select("all");

    // The stale 300ms hide lands after the item was reselected.
    assert!(!filter.complete(hide[0]));
    assert_eq!(filter.phase(0), Some(ItemPhase::FadingIn));

    settle(&mut filter, show);
    assert_eq!(filter.phase(0), Some(ItemPhase::Visible));
}

#[test]
fn completing_twice_is_a_noop() {
    let mut filter = PortfolioFilter::new(["a", "b"]);
    let steps = filter.select("b");
    assert!(filter.complete(steps[0]));
    assert!(!filter.complete(steps[0]));
}

#[test]
fn unknown_index_is_rejected() {
    let mut filter = PortfolioFilter::new(["a"]);
    assert!(!filter.complete(PendingStep { index: 9, token: 1, delay_ms: 0 }));
}

#[test]
fn matches_filter_all_and_exact() {
    assert!(matches_filter("all", "web"));
    assert!(matches_filter("web", "web"));
    assert!(!matches_filter("web", "branding"));
}

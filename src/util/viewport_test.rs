use super::*;

#[test]
fn breakpoint_boundaries_are_inclusive() {
    assert_eq!(breakpoint_for_width(640.0), Breakpoint::Mobile);
    assert_eq!(breakpoint_for_width(641.0), Breakpoint::Tablet);
    assert_eq!(breakpoint_for_width(968.0), Breakpoint::Tablet);
    assert_eq!(breakpoint_for_width(969.0), Breakpoint::Desktop);
}

#[test]
fn breakpoint_names_match_layout_classes() {
    assert_eq!(Breakpoint::Mobile.as_str(), "mobile");
    assert_eq!(Breakpoint::Tablet.as_str(), "tablet");
    assert_eq!(Breakpoint::Desktop.as_str(), "desktop");
}

#[test]
fn rect_fully_inside_is_visible() {
    let rect = Rect { top: 10.0, left: 10.0, bottom: 200.0, right: 300.0 };
    assert!(rect_in_viewport(rect, 1024.0, 768.0));
}

#[test]
fn rect_touching_edges_is_visible() {
    let rect = Rect { top: 0.0, left: 0.0, bottom: 768.0, right: 1024.0 };
    assert!(rect_in_viewport(rect, 1024.0, 768.0));
}

#[test]
fn rect_crossing_any_edge_is_not_visible() {
    let inside = Rect { top: 10.0, left: 10.0, bottom: 100.0, right: 100.0 };
    assert!(!rect_in_viewport(Rect { top: -1.0, ..inside }, 1024.0, 768.0));
    assert!(!rect_in_viewport(Rect { left: -1.0, ..inside }, 1024.0, 768.0));
    assert!(!rect_in_viewport(Rect { bottom: 769.0, ..inside }, 1024.0, 768.0));
    assert!(!rect_in_viewport(Rect { right: 1025.0, ..inside }, 1024.0, 768.0));
}

#[test]
fn scroll_target_subtracts_header_offset() {
    assert_eq!(scroll_target(500.0, 80.0), 420.0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_fallbacks_are_stable() {
    assert_eq!(current_breakpoint(), Breakpoint::Desktop);
    assert_eq!(scroll_y(), 0.0);
}

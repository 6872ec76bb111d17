use super::*;

#[test]
fn ease_out_cubic_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn ease_out_cubic_front_loads_motion() {
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
    assert!(ease_out_cubic(0.25) > 0.25);
}

#[test]
fn progress_clamps_to_unit_range() {
    assert_eq!(progress(-5.0, 300.0), 0.0);
    assert_eq!(progress(150.0, 300.0), 0.5);
    assert_eq!(progress(900.0, 300.0), 1.0);
}

#[test]
fn progress_with_zero_duration_completes_immediately() {
    assert_eq!(progress(0.0, 0.0), 1.0);
}

#[test]
fn interpolate_runs_from_start_to_end() {
    assert_eq!(interpolate(1.0, 0.0, 0.0), 1.0);
    assert_eq!(interpolate(1.0, 0.0, 1.0), 0.0);
    assert_eq!(interpolate(50.0, 0.0, 0.5), 25.0);
}

#[test]
fn css_values_for_supported_properties() {
    assert_eq!(AnimatedProperty::Opacity(1.0).css_name(), "opacity");
    assert_eq!(AnimatedProperty::Opacity(1.0).css_value(0.5), "0.5");
    assert_eq!(AnimatedProperty::TranslateY(0.0).css_name(), "transform");
    assert_eq!(AnimatedProperty::TranslateY(0.0).css_value(12.5), "translateY(12.5px)");
}

#[test]
fn parse_css_number_reads_leading_float() {
    assert_eq!(parse_css_number("0.7"), 0.7);
    assert_eq!(parse_css_number(" 1 "), 1.0);
    assert_eq!(parse_css_number("-20px"), -20.0);
    assert_eq!(parse_css_number("matrix(1, 0, 0, 1, 0, 50)"), 0.0);
    assert_eq!(parse_css_number(""), 0.0);
}

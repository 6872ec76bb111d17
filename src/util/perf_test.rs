use super::*;

#[test]
fn load_duration_is_end_minus_start() {
    assert_eq!(load_duration_ms(1200.0, 1250.5), 50.5);
}

#[test]
fn load_duration_before_load_end_is_zero() {
    // loadEventEnd stays 0 until the handler returns.
    assert_eq!(load_duration_ms(1200.0, 0.0), 0.0);
}

#[test]
fn input_delay_is_processing_minus_start() {
    assert_eq!(input_delay_ms(100.0, 112.0), 12.0);
}

#[test]
fn lazy_source_prefers_data_src() {
    assert_eq!(lazy_source(Some("real.jpg"), "placeholder.jpg"), "real.jpg");
}

#[test]
fn lazy_source_falls_back_to_current() {
    assert_eq!(lazy_source(None, "placeholder.jpg"), "placeholder.jpg");
    assert_eq!(lazy_source(Some(""), "placeholder.jpg"), "placeholder.jpg");
}

use super::*;

#[test]
fn map_range_is_linear_and_unclamped() {
    assert_eq!(map_range(0.0, 0.0, 10.0, 3.0, 0.5), 3.0);
    assert_eq!(map_range(10.0, 0.0, 10.0, 3.0, 0.5), 0.5);
    assert!((map_range(5.0, 0.0, 10.0, 1.0, 2.0) - 1.5).abs() < 1e-12);
    assert!((map_range(20.0, 0.0, 10.0, 0.0, 1.0) - 2.0).abs() < 1e-12);
}

#[test]
fn map_range_degenerate_input_maps_to_low() {
    assert_eq!(map_range(4.0, 1.0, 1.0, 7.0, 9.0), 7.0);
}

#[test]
fn limit_caps_only_long_vectors() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(limit(v, 10.0), v);
    let capped = limit(v, 2.5);
    assert!((capped.hypot() - 2.5).abs() < 1e-12);
    assert_eq!(limit(v, 0.0), Vec2::ZERO);
}

#[test]
fn with_magnitude_keeps_direction() {
    let v = with_magnitude(Vec2::new(0.0, -8.0), 3.0);
    assert!((v.y + 3.0).abs() < 1e-12);
    assert_eq!(v.x, 0.0);
    assert_eq!(with_magnitude(Vec2::ZERO, 3.0), Vec2::ZERO);
}

#[test]
fn constrain_clamps_both_sides() {
    assert_eq!(constrain(-1.0, 0.0, 100.0), 0.0);
    assert_eq!(constrain(101.0, 0.0, 100.0), 100.0);
    assert_eq!(constrain(42.0, 0.0, 100.0), 42.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
}

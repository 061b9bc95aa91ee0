use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.05
}

#[test]
fn grey_hex_has_no_hue_or_saturation() {
    let c = Hsba::from_hex("#C0C0C0").unwrap();
    assert_eq!(c.h, 0.0);
    assert_eq!(c.s, 0.0);
    assert!(close(c.b, 75.29));
    assert_eq!(c.a, 1.0);
}

#[test]
fn primary_hues() {
    let red = Hsba::from_hex("ff0000").unwrap();
    assert!(close(red.h, 0.0) && close(red.s, 100.0) && close(red.b, 100.0));
    let green = Hsba::from_hex("#00FF00").unwrap();
    assert!(close(green.h, 120.0));
    let blue = Hsba::from_hex("#0000ff").unwrap();
    assert!(close(blue.h, 240.0));
}

#[test]
fn eight_digit_hex_carries_alpha() {
    let c = Hsba::from_hex("#0a0a0a80").unwrap();
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn invalid_hex_is_a_validation_error() {
    for bad in ["#12345", "zzzzzz", "#1234567", "", "#ééé"] {
        let err = Hsba::from_hex(bad).unwrap_err();
        assert!(matches!(err, LogoError::Validation(_)), "{bad}");
    }
}

#[test]
fn rgb_round_trip_spot_check() {
    for hex in ["#F8F8F8", "#808080", "#FFFFFF", "#0a0a0a", "#3366cc"] {
        let c = Hsba::from_hex(hex).unwrap();
        let [r, g, b, a] = c.to_rgba8();
        let back = format!("#{r:02x}{g:02x}{b:02x}");
        assert_eq!(back, hex.to_ascii_lowercase());
        assert_eq!(a, 255);
    }
}

#[test]
fn premultiplied_scales_channels() {
    let c = Hsba::new(0.0, 0.0, 100.0, 0.5);
    let [r, g, b, a] = c.to_rgba8_premul();
    assert_eq!(a, 128);
    assert_eq!(r, 128);
    assert_eq!(g, 128);
    assert_eq!(b, 128);
}

#[test]
fn new_wraps_hue_and_clamps() {
    let c = Hsba::new(370.0, 120.0, -5.0, 2.0);
    assert!(close(c.h, 10.0));
    assert_eq!(c.s, 100.0);
    assert_eq!(c.b, 0.0);
    assert_eq!(c.a, 1.0);
}

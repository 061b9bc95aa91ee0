use super::*;

#[test]
fn defaults_match_reference_constants() {
    let cfg = LogoConfig::default();
    assert_eq!(cfg.particle_count, 300);
    assert_eq!(cfg.timing.intro_ms, 3000.0);
    assert_eq!(cfg.timing.form_ms, 4000.0);
    assert_eq!(cfg.timing.particle_fade_ms, 1000.0);
    assert_eq!(cfg.sample_gap, 10);
    assert_eq!(cfg.motion.arrival_threshold, 5.0);
    assert_eq!(cfg.palette.particle_colors.len(), 4);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_json_is_default() {
    let cfg = LogoConfig::from_json("{}").unwrap();
    assert_eq!(cfg, LogoConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = LogoConfig::from_json(
        r#"{ "text": "HI", "timing": { "intro_ms": 500 }, "seed": 9 }"#,
    )
    .unwrap();
    assert_eq!(cfg.text, "HI");
    assert_eq!(cfg.timing.intro_ms, 500.0);
    assert_eq!(cfg.timing.form_ms, 4000.0);
    assert_eq!(cfg.seed, Some(9));
}

#[test]
fn non_positive_durations_rejected() {
    let mut cfg = LogoConfig::default();
    cfg.timing.form_ms = 0.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("timing.form_ms"));
}

#[test]
fn zero_gap_rejected() {
    let cfg = LogoConfig {
        sample_gap: 0,
        ..LogoConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn inverted_size_range_rejected() {
    let mut cfg = LogoConfig::default();
    cfg.motion.size_range = [5.0, 2.0];
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_serde_error() {
    let err = LogoConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, LogoError::Serde(_)));
}

#[test]
fn font_size_scales_with_shorter_side() {
    let font = FontSpec::default();
    assert!((font.size_px(400) - 60.0).abs() < 1e-9);
}

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LogoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LogoError::config("x").to_string().contains("config error:"));
    assert!(LogoError::raster("x").to_string().contains("raster error:"));
    assert!(LogoError::surface("x").to_string().contains("surface error:"));
    assert!(
        LogoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LogoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

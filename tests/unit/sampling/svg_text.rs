use super::*;

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape_xml(r#"A&B <c> "d" 'e'"#),
        "A&amp;B &lt;c&gt; &quot;d&quot; &apos;e&apos;"
    );
}

#[test]
fn svg_centers_text_on_surface() {
    let svg = text_svg("LOGO", SurfaceSize::new(200, 100), "Arial", 15.0);
    assert!(svg.contains(r#"width="200" height="100""#));
    assert!(svg.contains(r#"x="100" y="50""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r#"font-family="Arial, sans-serif""#));
    assert!(svg.contains(">LOGO</text>"));
}

#[test]
fn empty_font_database_yields_transparent_mask() {
    let mut r = SvgTextRasterizer::with_fontdb(usvg::fontdb::Database::new());
    assert_eq!(r.face_count(), 0);
    let mask = r
        .rasterize("LOGO", SurfaceSize::new(64, 32), "Arial", 12.0)
        .unwrap();
    assert_eq!(mask.width(), 64);
    assert_eq!(mask.height(), 32);
    assert_eq!(mask.coverage(), 0);
}

#[test]
fn system_fonts_render_the_default_family() {
    let mut r = SvgTextRasterizer::new();
    if r.face_count() == 0 {
        return;
    }
    let mask = r
        .rasterize("MOODSCAPE", SurfaceSize::new(800, 450), "Arial", 67.5)
        .unwrap();
    assert_eq!((mask.width(), mask.height()), (800, 450));
    assert!(mask.coverage() > 0);
}

fn first_system_font_file() -> Option<std::path::PathBuf> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let path_of = |face: &usvg::fontdb::FaceInfo| match &face.source {
        usvg::fontdb::Source::File(path) => Some(path.clone()),
        usvg::fontdb::Source::SharedFile(path, _) => Some(path.clone()),
        _ => None,
    };
    // Prefer a plain text face over symbol or math faces.
    db.faces()
        .filter(|face| face.families.iter().any(|(name, _)| name.contains("Sans")))
        .find_map(path_of)
        .or_else(|| db.faces().find_map(path_of))
}

#[test]
fn unknown_family_falls_back_to_a_loaded_face() {
    let Some(path) = first_system_font_file() else {
        return;
    };
    let mut r = SvgTextRasterizer::with_fontdb(usvg::fontdb::Database::new());
    r.load_font_file(&path).unwrap();
    assert!(r.face_count() > 0);

    let font = crate::config::FontSpec {
        family: "No Such Family 4711".to_owned(),
        scale: 0.3,
    };
    let points = crate::sampling::TextPointSampler::new(5).sample_text(
        &mut r,
        "LOGO",
        SurfaceSize::new(240, 120),
        &font,
    );
    assert!(!points.is_empty(), "{}", path.display());
}

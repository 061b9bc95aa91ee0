use std::sync::Arc;

use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{LogoError, LogoResult};
use crate::sampling::{AlphaMask, GlyphRasterizer};

/// Off-screen text rasterizer backed by usvg text layout and the resvg CPU renderer.
///
/// The text is expressed as a single centered SVG `<text>` node and rendered white with no
/// stroke into a pixmap at pixel density 1. Font lookup uses system fonts plus any extra
/// font files registered with [`SvgTextRasterizer::load_font_file`]. A family that cannot be
/// resolved falls back to the generic sans-serif, serif and monospace faces, then to any loaded
/// face; if no face exists at all the mask is empty.
pub struct SvgTextRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgTextRasterizer {
    /// Rasterizer with the system font database loaded.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Rasterizer with an explicit font database (tests, embedded fonts).
    pub fn with_fontdb(db: usvg::fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Register an additional font file.
    pub fn load_font_file(&mut self, path: &std::path::Path) -> LogoResult<()> {
        Arc::make_mut(&mut self.fontdb)
            .load_font_file(path)
            .map_err(|e| LogoError::raster(format!("load font '{}': {e}", path.display())))
    }

    /// Number of faces available for text layout.
    pub fn face_count(&self) -> usize {
        self.fontdb.faces().count()
    }
}

impl Default for SvgTextRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphRasterizer for SvgTextRasterizer {
    fn rasterize(
        &mut self,
        text: &str,
        size: SurfaceSize,
        font_family: &str,
        font_size_px: f64,
    ) -> LogoResult<AlphaMask> {
        let svg = text_svg(text, size, font_family, font_size_px);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| LogoError::raster(format!("parse text svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
            .ok_or_else(|| LogoError::raster("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        AlphaMask::from_rgba8(size.width, size.height, pixmap.data())
    }
}

/// Font selection that never leaves text unrendered while any face is loaded.
///
/// usvg's default resolver maps `sans-serif` to a fixed family name, which matches nothing on
/// machines without that family.
fn font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families: Vec<usvg::fontdb::Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(name) => usvg::fontdb::Family::Name(name),
                })
                .collect();
            families.extend([
                usvg::fontdb::Family::SansSerif,
                usvg::fontdb::Family::Serif,
                usvg::fontdb::Family::Monospace,
            ]);

            let stretch = match font.stretch() {
                usvg::FontStretch::UltraCondensed => usvg::fontdb::Stretch::UltraCondensed,
                usvg::FontStretch::ExtraCondensed => usvg::fontdb::Stretch::ExtraCondensed,
                usvg::FontStretch::Condensed => usvg::fontdb::Stretch::Condensed,
                usvg::FontStretch::SemiCondensed => usvg::fontdb::Stretch::SemiCondensed,
                usvg::FontStretch::Normal => usvg::fontdb::Stretch::Normal,
                usvg::FontStretch::SemiExpanded => usvg::fontdb::Stretch::SemiExpanded,
                usvg::FontStretch::Expanded => usvg::fontdb::Stretch::Expanded,
                usvg::FontStretch::ExtraExpanded => usvg::fontdb::Stretch::ExtraExpanded,
                usvg::FontStretch::UltraExpanded => usvg::fontdb::Stretch::UltraExpanded,
            };
            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch,
                style,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|face| face.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

fn text_svg(text: &str, size: SurfaceSize, font_family: &str, font_size_px: f64) -> String {
    let w = size.width;
    let h = size.height;
    let cx = f64::from(w) / 2.0;
    let cy = f64::from(h) / 2.0;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{cx}" y="{cy}" font-family="{family}, sans-serif" font-size="{fs}" "#,
            r##"text-anchor="middle" dominant-baseline="central" fill="#ffffff" stroke="none">"##,
            "{text}</text></svg>"
        ),
        w = w,
        h = h,
        cx = cx,
        cy = cy,
        family = escape_xml(font_family),
        fs = font_size_px,
        text = escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/svg_text.rs"]
mod tests;

use super::*;

/// Paints a filled rectangle covering the middle third of the surface.
struct BlockRasterizer {
    calls: usize,
}

impl GlyphRasterizer for BlockRasterizer {
    fn rasterize(
        &mut self,
        _text: &str,
        size: SurfaceSize,
        _font_family: &str,
        _font_size_px: f64,
    ) -> LogoResult<AlphaMask> {
        self.calls += 1;
        let mut mask = AlphaMask::new(size.width, size.height);
        for y in size.height / 3..2 * size.height / 3 {
            for x in size.width / 3..2 * size.width / 3 {
                mask.set_alpha(x, y, 255);
            }
        }
        Ok(mask)
    }
}

struct FailingRasterizer;

impl GlyphRasterizer for FailingRasterizer {
    fn rasterize(
        &mut self,
        _text: &str,
        _size: SurfaceSize,
        _font_family: &str,
        _font_size_px: f64,
    ) -> LogoResult<AlphaMask> {
        Err(LogoError::raster("font unavailable"))
    }
}

#[test]
fn samples_only_grid_cells_with_alpha() {
    let mut mask = AlphaMask::new(40, 30);
    mask.set_alpha(10, 20, 1);
    mask.set_alpha(11, 20, 255); // off-grid
    mask.set_alpha(30, 0, 200);
    let set = TextPointSampler::new(10).sample_mask(&mask);
    assert_eq!(
        set.points(),
        &[Vec2::new(-10.0, 5.0), Vec2::new(10.0, -15.0)]
    );
}

#[test]
fn order_is_column_major() {
    let mut mask = AlphaMask::new(20, 20);
    mask.set_alpha(10, 0, 255);
    mask.set_alpha(0, 10, 255);
    let set = TextPointSampler::new(10).sample_mask(&mask);
    // x = 0 column comes first even though its point lies on a later row.
    assert_eq!(set.points()[0], Vec2::new(-10.0, 0.0));
    assert_eq!(set.points()[1], Vec2::new(0.0, -10.0));
}

#[test]
fn sampling_twice_is_identical() {
    let sampler = TextPointSampler::new(10);
    let mut r = BlockRasterizer { calls: 0 };
    let size = SurfaceSize::new(300, 120);
    let a = sampler.sample_text(&mut r, "LOGO", size, &FontSpec::default());
    let b = sampler.sample_text(&mut r, "LOGO", size, &FontSpec::default());
    assert_eq!(r.calls, 2);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn empty_surface_yields_no_points_without_rasterizing() {
    let mut r = BlockRasterizer { calls: 0 };
    let set = TextPointSampler::default().sample_text(
        &mut r,
        "LOGO",
        SurfaceSize::new(0, 100),
        &FontSpec::default(),
    );
    assert!(set.is_empty());
    assert_eq!(r.calls, 0);
}

#[test]
fn rasterizer_failure_degrades_to_empty() {
    let set = TextPointSampler::default().sample_text(
        &mut FailingRasterizer,
        "LOGO",
        SurfaceSize::new(100, 100),
        &FontSpec::default(),
    );
    assert!(set.is_empty());
}

#[test]
fn cyclic_assignment_wraps() {
    let set = TargetPointSet::new(vec![Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);
    assert_eq!(set.cyclic(0), Some(Vec2::new(1.0, 0.0)));
    assert_eq!(set.cyclic(3), Some(Vec2::new(2.0, 0.0)));
    assert_eq!(TargetPointSet::empty().cyclic(0), None);
}

#[test]
fn mask_from_rgba_reads_alpha_channel() {
    let rgba = [0, 0, 0, 0, 9, 9, 9, 77];
    let mask = AlphaMask::from_rgba8(2, 1, &rgba).unwrap();
    assert_eq!(mask.alpha_at(0, 0), 0);
    assert_eq!(mask.alpha_at(1, 0), 77);
    assert_eq!(mask.coverage(), 1);
    assert!(AlphaMask::from_rgba8(3, 1, &rgba).is_err());
}

#[test]
fn zero_gap_is_clamped() {
    assert_eq!(TextPointSampler::new(0).gap(), 1);
}

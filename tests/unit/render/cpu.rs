use super::*;

fn white(alpha: f64) -> Hsba {
    Hsba::new(0.0, 0.0, 100.0, alpha)
}

#[test]
fn new_surface_is_transparent() {
    let mut s = CpuSurface::new(SurfaceSize::new(8, 4)).unwrap();
    let f = s.snapshot();
    assert_eq!((f.width, f.height), (8, 4));
    assert!(f.premultiplied);
    assert!(f.data.iter().all(|&b| b == 0));
}

#[test]
fn opaque_background_replaces_pixels() {
    let mut s = CpuSurface::new(SurfaceSize::new(4, 4)).unwrap();
    s.fill_background(Hsba::new(0.0, 100.0, 100.0, 1.0));
    assert_eq!(s.pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(s.pixel(4, 0), None);
}

#[test]
fn translucent_background_tints() {
    let mut s = CpuSurface::new(SurfaceSize::new(2, 2)).unwrap();
    s.fill_background(white(1.0));
    s.fill_background(Hsba::new(0.0, 0.0, 0.0, 0.5));
    let px = s.pixel(0, 0).unwrap();
    assert_eq!(px[3], 255);
    assert!(px[0] > 100 && px[0] < 155, "{px:?}");
}

#[test]
fn circle_covers_its_center_only() {
    let mut s = CpuSurface::new(SurfaceSize::new(32, 32)).unwrap();
    s.fill_background(Hsba::new(0.0, 0.0, 0.0, 1.0));
    s.fill_circle(Point::new(16.0, 16.0), 8.0, white(1.0));
    s.end_frame();

    let center = s.pixel(16, 16).unwrap();
    assert!(center[0] > 200, "{center:?}");
    assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn background_after_circle_draws_on_top() {
    let mut s = CpuSurface::new(SurfaceSize::new(16, 16)).unwrap();
    s.fill_circle(Point::new(8.0, 8.0), 10.0, white(1.0));
    s.fill_background(Hsba::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(s.pixel(8, 8), Some([0, 0, 0, 255]));
}

#[test]
fn oversized_surface_is_rejected() {
    assert!(CpuSurface::new(SurfaceSize::new(70_000, 10)).is_err());
}

#[test]
fn resize_reallocates() {
    let mut s = CpuSurface::new(SurfaceSize::new(4, 4)).unwrap();
    s.fill_background(white(1.0));
    s.resize(SurfaceSize::new(6, 2)).unwrap();
    assert_eq!(s.size(), SurfaceSize::new(6, 2));
    assert_eq!(s.pixel(5, 1), Some([0, 0, 0, 0]));
}

#[test]
fn flushed_circles_are_not_drawn_again() {
    let mut s = CpuSurface::new(SurfaceSize::new(32, 32)).unwrap();
    s.fill_circle(Point::new(8.0, 8.0), 6.0, white(1.0));
    assert_eq!(s.batched_circles(), 1);
    s.end_frame();
    assert_eq!(s.batched_circles(), 0);

    s.fill_background(Hsba::new(0.0, 0.0, 0.0, 1.0));
    s.fill_circle(Point::new(24.0, 24.0), 6.0, white(1.0));
    s.end_frame();

    assert_eq!(s.pixel(8, 8), Some([0, 0, 0, 255]));
    assert!(s.pixel(24, 24).unwrap()[0] > 200);
}

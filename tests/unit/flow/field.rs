use super::*;

struct Constant(f64);

impl NoiseSource for Constant {
    fn noise2(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }

    fn noise3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.0
    }
}

#[test]
fn perlin_stays_in_unit_range() {
    let n = PerlinNoise::new(3);
    for i in 0..200 {
        let t = f64::from(i) * 0.137;
        let a = n.noise2(t, t * 0.5 + 11.3);
        let b = n.noise3(t * 0.3, -t, t * 0.01 + 42.0);
        assert!((0.0..=1.0).contains(&a));
        assert!((0.0..=1.0).contains(&b));
    }
}

#[test]
fn perlin_is_deterministic_per_seed() {
    let a = PerlinNoise::new(11);
    let b = PerlinNoise::new(11);
    for i in 0..50 {
        let t = f64::from(i) * 0.71 + 0.05;
        assert_eq!(a.noise3(t, t * 2.0, t * 3.0), b.noise3(t, t * 2.0, t * 3.0));
    }
}

#[test]
fn perlin_is_continuous() {
    let n = PerlinNoise::default();
    let a = n.noise3(1.23, 4.56, 7.89);
    let b = n.noise3(1.23 + 1e-6, 4.56, 7.89);
    assert!((a - b).abs() < 1e-4);
}

#[test]
fn flow_force_has_requested_magnitude() {
    let n = PerlinNoise::new(5);
    let f = flow_force(&n, Vec2::new(120.0, -40.0), 0.3, 0.005, 720.0, 0.1);
    assert!((f.hypot() - 0.1).abs() < 1e-12);
}

#[test]
fn flow_force_follows_noise_angle() {
    // 0.25 * 2π points straight along +y.
    let n = Constant(0.25);
    let f = flow_force(&n, Vec2::ZERO, 0.0, 1.0, std::f64::consts::TAU, 1.0);
    assert!(f.x.abs() < 1e-12);
    assert!((f.y - 1.0).abs() < 1e-12);
}

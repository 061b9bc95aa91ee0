use kurbo::Vec2;

/// Re-map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]` without clamping.
///
/// A degenerate input range maps everything to `out_lo`.
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (value - in_lo) / span * (out_hi - out_lo)
}

/// Clamp `value` into `[lo, hi]`.
pub fn constrain(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Cap the magnitude of `v` at `max`.
///
/// A `max` of zero (or below) yields the zero vector.
pub fn limit(v: Vec2, max: f64) -> Vec2 {
    if max <= 0.0 {
        return Vec2::ZERO;
    }
    let len2 = v.hypot2();
    if len2 > max * max {
        v * (max / len2.sqrt())
    } else {
        v
    }
}

/// Rescale `v` to length `mag`. The zero vector stays zero.
pub fn with_magnitude(v: Vec2, mag: f64) -> Vec2 {
    let len = v.hypot();
    if len == 0.0 || !len.is_finite() {
        return Vec2::ZERO;
    }
    v * (mag / len)
}

/// Unit vector pointing along `angle` radians.
pub fn from_angle(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

use crate::foundation::error::{LogoError, LogoResult};

/// Color in HSB space with straight alpha.
///
/// Ranges: hue `[0, 360)`, saturation and brightness `[0, 100]`, alpha `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsba {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Brightness in percent.
    pub b: f64,
    /// Straight alpha.
    pub a: f64,
}

impl Hsba {
    /// Build a color, wrapping hue and clamping the remaining channels.
    pub fn new(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            b: b.clamp(0.0, 100.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> LogoResult<Self> {
        let [r, g, b, a] = parse_hex(s).map_err(LogoError::validation)?;
        Ok(Self::from_rgba8(r, g, b, a))
    }

    /// Convert straight RGBA8 into HSB.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let rf = f64::from(r) / 255.0;
        let gf = f64::from(g) / 255.0;
        let bf = f64::from(b) / 255.0;

        let max = rf.max(gf).max(bf);
        let min = rf.min(gf).min(bf);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == rf {
            60.0 * ((gf - bf) / delta).rem_euclid(6.0)
        } else if max == gf {
            60.0 * ((bf - rf) / delta + 2.0)
        } else {
            60.0 * ((rf - gf) / delta + 4.0)
        };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self::new(hue, saturation * 100.0, max * 100.0, f64::from(a) / 255.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to straight-alpha RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let v = self.b / 100.0;
        let c = v * (self.s / 100.0);
        let hp = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [to_u8(r + m), to_u8(g + m), to_u8(b + m), to_u8(self.a)]
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> [u8; 4] {
        let [r, g, b, a] = self.to_rgba8();
        let premul = |c: u8| crate::foundation::math::mul_div255(u16::from(c), u16::from(a));
        [premul(r), premul(g), premul(b), a]
    }
}

fn parse_hex(s: &str) -> Result<[u8; 4], String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ascii".to_owned());
    }

    match s.len() {
        6 => Ok([
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ]),
        8 => Ok([
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ]),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;

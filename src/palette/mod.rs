pub(crate) mod color;

use crate::foundation::error::{LogoError, LogoResult};
use color::Hsba;
use rand::Rng;
use rand::seq::SliceRandom;

/// Palette as it appears in configuration: hex strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PaletteDef {
    /// Background color.
    pub background: String,
    /// Particle colors; each particle picks one uniformly at creation.
    pub particle_colors: Vec<String>,
}

impl Default for PaletteDef {
    fn default() -> Self {
        Self {
            background: "#0a0a0a".to_owned(),
            particle_colors: vec![
                "#F8F8F8".to_owned(),
                "#C0C0C0".to_owned(),
                "#808080".to_owned(),
                "#FFFFFF".to_owned(),
            ],
        }
    }
}

/// Parsed, read-only palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    background: Hsba,
    particle_colors: Vec<Hsba>,
}

impl Palette {
    /// Parse every hex color once.
    pub fn from_def(def: &PaletteDef) -> LogoResult<Self> {
        let background = Hsba::from_hex(&def.background)
            .map_err(|e| LogoError::validation(format!("palette background: {e}")))?;
        if def.particle_colors.is_empty() {
            return Err(LogoError::validation(
                "palette must contain at least one particle color",
            ));
        }
        let particle_colors = def
            .particle_colors
            .iter()
            .enumerate()
            .map(|(i, hex)| {
                Hsba::from_hex(hex)
                    .map_err(|e| LogoError::validation(format!("palette particle color {i}: {e}")))
            })
            .collect::<LogoResult<Vec<_>>>()?;
        Ok(Self {
            background,
            particle_colors,
        })
    }

    /// Opaque background color.
    pub fn background(&self) -> Hsba {
        self.background
    }

    /// Colors particles pick from; never empty.
    pub fn particle_colors(&self) -> &[Hsba] {
        &self.particle_colors
    }

    /// Uniformly pick a particle color.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Hsba {
        // `from_def` guarantees a non-empty list.
        self.particle_colors
            .choose(rng)
            .copied()
            .unwrap_or(self.background)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/palette.rs"]
mod tests;

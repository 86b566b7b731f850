use crate::color::RGBA;
use crate::error::Result;
use crate::texture::Texture2;

use super::{AlphaCurve, ColorCurve, ControlPoint};

/// Lookup texture width, one column per sample position.
pub const TEXTURE_WIDTH: usize = 512;
/// Rows hold identical data, two exist for GPU sampling comfort.
pub const TEXTURE_HEIGHT: usize = 2;

/// One-dimensional transfer function: color and opacity curves over
/// the normalized scalar domain, resampled into a lookup texture.
///
/// The curves are decoupled, a color stop needs no opacity stop at the
/// same position. The cached texture only changes on an explicit
/// [`TransferFunction1d::generate_texture`] call; mutate points first,
/// then regenerate.
pub struct TransferFunction1d {
    colors: ColorCurve,
    alphas: AlphaCurve,
    texture: Texture2,
    histogram: Option<Texture2>,
}

impl Default for TransferFunction1d {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferFunction1d {
    /// Empty transfer function. Until points are added it resolves to
    /// white with opacity ramping 0 to 1.
    pub fn new() -> TransferFunction1d {
        TransferFunction1d {
            colors: ColorCurve::default(),
            alphas: AlphaCurve::default(),
            texture: Texture2::new(TEXTURE_WIDTH, TEXTURE_HEIGHT),
            histogram: None,
        }
    }

    /// Adds a color stop at `data_value`.
    pub fn add_color_point(&mut self, data_value: f32, color: RGBA) -> Result<()> {
        self.colors.add(ControlPoint::new(data_value, color))
    }

    /// Adds an opacity stop at `data_value`.
    pub fn add_alpha_point(&mut self, data_value: f32, alpha: f32) -> Result<()> {
        self.alphas.add(ControlPoint::new(data_value, alpha))
    }

    pub fn colors(&self) -> &ColorCurve {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorCurve {
        &mut self.colors
    }

    pub fn alphas(&self) -> &AlphaCurve {
        &self.alphas
    }

    pub fn alphas_mut(&mut self) -> &mut AlphaCurve {
        &mut self.alphas
    }

    /// Resamples both curves into the lookup texture.
    ///
    /// Runs one monotonic cursor per curve across the columns, so a
    /// regeneration costs O(width + points). Total for any curve state.
    pub fn generate_texture(&mut self) {
        let colors = self.colors.anchored();
        let alphas = self.alphas.anchored();
        let mut color_sweep = colors.sweep();
        let mut alpha_sweep = alphas.sweep();

        for x in 0..TEXTURE_WIDTH {
            let t = x as f32 / (TEXTURE_WIDTH - 1) as f32;
            let color = color_sweep.value_at(t);
            let alpha = alpha_sweep.value_at(t);
            let texel = RGBA::new(color.x, color.y, color.z, alpha);
            for y in 0..TEXTURE_HEIGHT {
                self.texture.put(x, y, texel);
            }
        }
    }

    /// The cached lookup texture, as of the last regeneration.
    pub fn texture(&self) -> &Texture2 {
        &self.texture
    }

    /// Evaluates the merged curves directly, bypassing the texture.
    pub fn sample(&self, t: f32) -> RGBA {
        let color = self.colors.sample(t);
        let alpha = self.alphas.sample(t);
        RGBA::new(color.x, color.y, color.z, alpha)
    }

    /// Stores the histogram overlay shown behind the curve editor.
    /// Display-only, generation never reads it.
    pub fn set_histogram(&mut self, histogram: Texture2) {
        self.histogram = Some(histogram);
    }

    pub fn histogram(&self) -> Option<&Texture2> {
        self.histogram.as_ref()
    }
}

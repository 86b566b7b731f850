use nalgebra::vector;

use crate::color::{self, RGBA};
use crate::common::Rect;
use crate::error::{ensure_unit, Error, Result};
use crate::texture::Texture2;

/// Default lookup texture resolution.
/// Scalar value runs along x, gradient magnitude along y.
pub const DEFAULT_WIDTH: usize = 1024;
pub const DEFAULT_HEIGHT: usize = 512;

/// Direction a box's opacity ramps in, `min_alpha` to `alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaRamp {
    /// Along the scalar axis, the editor's usual setup.
    #[default]
    LeftToRight,
    RightToLeft,
    /// Along the gradient magnitude axis.
    BottomToTop,
    TopToBottom,
    /// Outward from the box center.
    Radial,
}

/// Rectangular classification region over the
/// (scalar value, gradient magnitude) domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfBox {
    pub rect: Rect,
    pub color: RGBA,
    pub min_alpha: f32,
    pub alpha: f32,
    pub ramp: AlphaRamp,
}

impl TfBox {
    /// Box ramping from fully transparent up to `alpha`, with the
    /// default ramp direction.
    pub fn new(rect: Rect, color: RGBA, alpha: f32) -> TfBox {
        TfBox {
            rect,
            color,
            min_alpha: 0.0,
            alpha,
            ramp: AlphaRamp::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.rect.width > 0.0) || !(self.rect.height > 0.0) {
            return Err(Error::DegenerateBox {
                width: self.rect.width,
                height: self.rect.height,
            });
        }
        ensure_unit("box x", self.rect.x)?;
        ensure_unit("box y", self.rect.y)?;
        ensure_unit("box right edge", self.rect.right())?;
        ensure_unit("box top edge", self.rect.top())?;
        ensure_unit("box min alpha", self.min_alpha)?;
        ensure_unit("box alpha", self.alpha)?;
        Ok(())
    }

    /// Opacity at `(u, v)`, which is expected inside the rect.
    fn ramp_alpha(&self, u: f32, v: f32) -> f32 {
        let frac = match self.ramp {
            AlphaRamp::LeftToRight => (u - self.rect.x) / self.rect.width,
            AlphaRamp::RightToLeft => (self.rect.right() - u) / self.rect.width,
            AlphaRamp::BottomToTop => (v - self.rect.y) / self.rect.height,
            AlphaRamp::TopToBottom => (self.rect.top() - v) / self.rect.height,
            AlphaRamp::Radial => {
                let center = vector![
                    self.rect.x + self.rect.width / 2.0,
                    self.rect.y + self.rect.height / 2.0
                ];
                let half_diagonal = vector![self.rect.width, self.rect.height].magnitude() / 2.0;
                (vector![u, v] - center).magnitude() / half_diagonal
            }
        };

        self.min_alpha + (self.alpha - self.min_alpha) * frac.clamp(0.0, 1.0)
    }
}

/// Two-dimensional transfer function: a stack of classification boxes
/// rasterized into a lookup texture.
///
/// Boxes may overlap; insertion order is the z-order and the last
/// containing box wins every texel. The cached texture only changes on
/// an explicit [`TransferFunction2d::generate_texture`] call.
pub struct TransferFunction2d {
    boxes: Vec<TfBox>,
    texture: Texture2,
}

impl Default for TransferFunction2d {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferFunction2d {
    pub fn new() -> TransferFunction2d {
        TransferFunction2d::with_resolution(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Transfer function with a custom lookup resolution.
    pub fn with_resolution(width: usize, height: usize) -> TransferFunction2d {
        TransferFunction2d {
            boxes: Vec::new(),
            texture: Texture2::new(width, height),
        }
    }

    /// Appends a box on top of the stack, returning its index.
    /// The box ramps from fully transparent up to `alpha`.
    pub fn add_box(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RGBA,
        alpha: f32,
    ) -> Result<usize> {
        self.insert_box(TfBox::new(Rect::new(x, y, width, height), color, alpha))
    }

    /// Appends a fully specified box on top of the stack.
    /// Rejects rects leaving the unit square, non-positive extents and
    /// opacities outside [0,1], leaving the stack unchanged.
    pub fn insert_box(&mut self, tf_box: TfBox) -> Result<usize> {
        tf_box.validate()?;
        self.boxes.push(tf_box);
        Ok(self.boxes.len() - 1)
    }

    /// Replaces the box at `index`, keeping its place in the z-order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_box(&mut self, index: usize, tf_box: TfBox) -> Result<()> {
        tf_box.validate()?;
        self.boxes[index] = tf_box;
        Ok(())
    }

    /// Removes the box at `index`. Later boxes shift down one index,
    /// so indices held across a removal must be re-resolved.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_box(&mut self, index: usize) -> TfBox {
        self.boxes.remove(index)
    }

    pub fn boxes(&self) -> &[TfBox] {
        &self.boxes
    }

    /// Classifies one domain position. The topmost containing box
    /// wins, uncovered positions are transparent black.
    pub fn classify(&self, u: f32, v: f32) -> RGBA {
        classify_boxes(&self.boxes, u, v)
    }

    /// Rasterizes the box stack into the lookup texture.
    /// Total for any stack, including an empty one.
    pub fn generate_texture(&mut self) {
        let width = self.texture.width();
        let height = self.texture.height();

        for y in 0..height {
            let v = y as f32 / height as f32;
            for x in 0..width {
                let u = x as f32 / width as f32;
                let texel = classify_boxes(&self.boxes, u, v);
                self.texture.put(x, y, texel);
            }
        }
    }

    /// The cached lookup texture, as of the last regeneration.
    pub fn texture(&self) -> &Texture2 {
        &self.texture
    }
}

fn classify_boxes(boxes: &[TfBox], u: f32, v: f32) -> RGBA {
    let mut texel = color::zero();
    for tf_box in boxes {
        if tf_box.rect.contains(u, v) {
            texel = tf_box.color;
            texel.w = tf_box.ramp_alpha(u, v);
        }
    }
    texel
}

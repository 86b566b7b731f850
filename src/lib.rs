pub mod common;
pub mod error;
pub mod histogram;
pub mod noise;
pub mod premade;
pub mod test_helpers;
pub mod texture;
pub mod transfer;
pub mod volumetric;

pub use error::{Error, Result};

pub mod color {
    use nalgebra::{vector, Vector4};

    pub type RGBA = Vector4<f32>;

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
        vector![r, g, b, a]
    }

    pub fn zero() -> RGBA {
        vector![0.0, 0.0, 0.0, 0.0]
    }

    pub fn mono(v: f32, opacity: f32) -> RGBA {
        vector![v, v, v, opacity]
    }

    pub fn white() -> RGBA {
        vector![1.0, 1.0, 1.0, 1.0]
    }
}

//! Random grayscale texture for ray start jitter.

use crate::color;
use crate::texture::Texture2;

/// Uniform noise texture. Every texel is an independent gray in
/// [0,1) with full opacity.
pub fn noise_texture(width: usize, height: usize) -> Texture2 {
    let rng = fastrand::Rng::new();
    fill_noise(width, height, &rng)
}

/// Seeded variant, reproducible across runs.
pub fn noise_texture_seeded(width: usize, height: usize, seed: u64) -> Texture2 {
    let rng = fastrand::Rng::new();
    rng.seed(seed);
    fill_noise(width, height, &rng)
}

fn fill_noise(width: usize, height: usize, rng: &fastrand::Rng) -> Texture2 {
    let mut texture = Texture2::new(width, height);
    for y in 0..height {
        for x in 0..width {
            texture.put(x, y, color::mono(rng.f32(), 1.0));
        }
    }
    texture
}

use nalgebra::Vector3;

use crate::color::{self, RGBA};

/// CPU-side RGBA float image.
///
/// Texels are stored row-major, x-fastest. Freshly created textures
/// are transparent black.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture2 {
    width: usize,
    height: usize,
    texels: Vec<RGBA>,
}

impl Texture2 {
    pub fn new(width: usize, height: usize) -> Texture2 {
        Texture2 {
            width,
            height,
            texels: vec![color::zero(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index_2d(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    pub fn texel(&self, x: usize, y: usize) -> RGBA {
        self.texels[self.index_2d(x, y)]
    }

    pub fn put(&mut self, x: usize, y: usize, value: RGBA) {
        let index = self.index_2d(x, y);
        self.texels[index] = value;
    }

    pub fn texels(&self) -> &[RGBA] {
        &self.texels
    }

    /// Flattens into raw floats for GPU upload, four per texel.
    pub fn to_rgba_floats(&self) -> Vec<f32> {
        let mut floats = Vec::with_capacity(4 * self.texels.len());
        for texel in &self.texels {
            floats.extend_from_slice(&[texel.x, texel.y, texel.z, texel.w]);
        }
        floats
    }
}

/// CPU-side volumetric RGBA float image.
///
/// Same storage contract as [`Texture2`] extended with a z axis,
/// linearized as `x + y*size.x + z*size.x*size.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture3 {
    size: Vector3<usize>,
    texels: Vec<RGBA>,
}

impl Texture3 {
    pub fn new(size: Vector3<usize>) -> Texture3 {
        Texture3 {
            size,
            texels: vec![color::zero(); size.x * size.y * size.z],
        }
    }

    pub fn size(&self) -> Vector3<usize> {
        self.size
    }

    fn index_3d(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size.x + z * self.size.x * self.size.y
    }

    pub fn texel(&self, x: usize, y: usize, z: usize) -> RGBA {
        self.texels[self.index_3d(x, y, z)]
    }

    pub fn put(&mut self, x: usize, y: usize, z: usize, value: RGBA) {
        let index = self.index_3d(x, y, z);
        self.texels[index] = value;
    }

    pub fn texels(&self) -> &[RGBA] {
        &self.texels
    }

    /// Flattens into raw floats for GPU upload, four per texel.
    pub fn to_rgba_floats(&self) -> Vec<f32> {
        let mut floats = Vec::with_capacity(4 * self.texels.len());
        for texel in &self.texels {
            floats.extend_from_slice(&[texel.x, texel.y, texel.z, texel.w]);
        }
        floats
    }
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;

    #[test]
    fn new_texture_is_transparent() {
        let texture = Texture2::new(4, 2);

        assert_eq!(texture.texels().len(), 8);
        for texel in texture.texels() {
            assert_eq!(*texel, color::zero());
        }
    }

    #[test]
    fn put_lands_x_fastest() {
        let mut texture = Texture2::new(3, 2);
        texture.put(1, 1, color::mono(0.5, 1.0));

        // Row 1 starts at flat index 3
        assert_eq!(texture.texels()[4], color::mono(0.5, 1.0));
        assert_eq!(texture.texel(1, 1), color::mono(0.5, 1.0));
    }

    #[test]
    fn put_lands_x_fastest_3d() {
        let mut texture = Texture3::new(vector![2, 2, 2]);
        texture.put(1, 0, 1, color::mono(0.25, 1.0));

        // z slice stride is 4, so (1, 0, 1) sits at flat index 5
        assert_eq!(texture.texels()[5], color::mono(0.25, 1.0));
        assert_eq!(texture.texel(1, 0, 1), color::mono(0.25, 1.0));
    }

    #[test]
    fn rgba_floats_keep_texel_order() {
        let mut texture = Texture2::new(2, 1);
        texture.put(0, 0, color::new(0.1, 0.2, 0.3, 0.4));
        texture.put(1, 0, color::new(0.5, 0.6, 0.7, 0.8));

        let floats = texture.to_rgba_floats();

        assert_eq!(floats.len(), 8);
        assert_eq!(floats[..4], [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(floats[4..], [0.5, 0.6, 0.7, 0.8]);
    }
}

use std::path::Path;

use nalgebra::Vector3;
use tracing::info;

use crate::{
    color,
    common::ScalarRange,
    error::{Error, Result},
    texture::Texture3,
};

use super::{import, DataSource, ImportConfig};

/// Imported volumetric scalar field with its derived voxel texture.
///
/// The scalar field is immutable after construction. The texture packs
/// `(gradient.xyz, normalized scalar)` per voxel and is computed once,
/// at construction.
pub struct VolumeDataset {
    size: Vector3<usize>,
    data: Vec<i32>,
    range: ScalarRange,
    texture: Texture3,
}

impl VolumeDataset {
    /// Builds a dataset from already decoded samples.
    /// Sample order is x-fastest, then y, then z.
    pub fn from_samples(size: Vector3<usize>, data: Vec<i32>) -> Result<VolumeDataset> {
        if size.x == 0 || size.y == 0 || size.z == 0 {
            return Err(Error::Dimensions(size.x, size.y, size.z));
        }

        let voxels = size.x * size.y * size.z;
        if data.len() != voxels {
            return Err(Error::Format {
                expected: voxels,
                got: data.len(),
            });
        }

        let range = ScalarRange::from_samples(&data);
        let texture = build_voxel_texture(size, &data, range);

        Ok(VolumeDataset {
            size,
            data,
            range,
            texture,
        })
    }

    /// Decodes a raw scan from an in-memory buffer.
    pub fn from_slice(bytes: &[u8], config: &ImportConfig) -> Result<VolumeDataset> {
        let size = config.size;
        if size.x == 0 || size.y == 0 || size.z == 0 {
            return Err(Error::Dimensions(size.x, size.y, size.z));
        }

        let (data, range) = import::decode_samples(bytes, config)?;
        let texture = build_voxel_texture(size, &data, range);

        info!(
            "Imported volume {}x{}x{}, samples in [{}, {}]",
            size.x, size.y, size.z, range.low, range.high
        );

        Ok(VolumeDataset {
            size,
            data,
            range,
            texture,
        })
    }

    /// Memory-maps a raw scan file and decodes it.
    pub fn from_file<P>(path: P, config: &ImportConfig) -> Result<VolumeDataset>
    where
        P: AsRef<Path>,
    {
        let source = DataSource::from_file(path)?;
        VolumeDataset::from_slice(source.get_slice(), config)
    }

    pub fn size(&self) -> Vector3<usize> {
        self.size
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn range(&self) -> ScalarRange {
        self.range
    }

    pub fn min_value(&self) -> i32 {
        self.range.low
    }

    pub fn max_value(&self) -> i32 {
        self.range.high
    }

    /// Per-voxel `(gradient.xyz, normalized scalar)` texture.
    pub fn texture(&self) -> &Texture3 {
        &self.texture
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size.x + z * self.size.x * self.size.y
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> i32 {
        self.data[self.index(x, y, z)]
    }

    /// Scalar mapped onto [0,1] against the observed maximum.
    /// The observed minimum does not shift the mapping.
    pub fn normalize(&self, value: i32) -> f32 {
        value as f32 / normalization_divisor(self.range)
    }
}

fn normalization_divisor(range: ScalarRange) -> f32 {
    if range.high == 0 {
        1.0
    } else {
        range.high as f32
    }
}

/// Packs every voxel into `(gradient.xyz, normalized scalar)`.
///
/// Gradients are central differences with neighbor coordinates clamped
/// to the volume, so a boundary voxel reuses itself as the outside
/// neighbor. Components are normalized by the observed range width.
fn build_voxel_texture(size: Vector3<usize>, data: &[i32], range: ScalarRange) -> Texture3 {
    let index = |x: usize, y: usize, z: usize| x + y * size.x + z * size.x * size.y;

    // A constant volume has zero width, keep the divisors finite
    let grad_div = range.width().max(1) as f32;
    let scalar_div = normalization_divisor(range);

    let mut texture = Texture3::new(size);
    for z in 0..size.z {
        for y in 0..size.y {
            for x in 0..size.x {
                let x_prev = data[index(x.saturating_sub(1), y, z)] as f32;
                let x_next = data[index((x + 1).min(size.x - 1), y, z)] as f32;
                let y_prev = data[index(x, y.saturating_sub(1), z)] as f32;
                let y_next = data[index(x, (y + 1).min(size.y - 1), z)] as f32;
                let z_prev = data[index(x, y, z.saturating_sub(1))] as f32;
                let z_next = data[index(x, y, (z + 1).min(size.z - 1))] as f32;

                let value = data[index(x, y, z)] as f32;
                let texel = color::new(
                    (x_prev - x_next) / grad_div,
                    (y_prev - y_next) / grad_div,
                    (z_prev - z_next) / grad_div,
                    value / scalar_div,
                );
                texture.put(x, y, z, texel);
            }
        }
    }
    texture
}

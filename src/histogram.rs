//! Histogram textures derived from a dataset.
//! Overlays for the transfer function editors, never consumed by
//! generation itself.

use tracing::debug;

use crate::color;
use crate::texture::Texture2;
use crate::volumetric::VolumeDataset;

/// Default bucket count of the scalar value histogram.
pub const DEFAULT_BUCKETS: usize = 512;

/// Upper end of the gradient magnitude axis. Range-normalized central
/// difference components lie in [-1,1], so magnitudes stay below this.
pub const MAX_GRADIENT_MAGNITUDE: f32 = 1.75;

/// Frequency of scalar values over the normalized domain, as a
/// `buckets` wide grayscale strip.
///
/// Counts are log-scaled, sparse buckets stay visible next to
/// dominant ones. Pure: the same dataset yields the same texture.
pub fn value_histogram(dataset: &VolumeDataset, buckets: usize) -> Texture2 {
    assert!(buckets > 0);

    let mut counts = vec![0u32; buckets];
    for &value in dataset.data() {
        let u = dataset.normalize(value);
        counts[bucket_of(u, buckets)] += 1;
    }

    texture_from_counts(&counts, buckets, 1)
}

/// Joint frequency of (normalized value, gradient magnitude) pairs,
/// read from the dataset's cached voxel texture.
///
/// Value runs along x, magnitude along y, capped at
/// [`MAX_GRADIENT_MAGNITUDE`] into the top row.
pub fn value_gradient_histogram(dataset: &VolumeDataset, width: usize, height: usize) -> Texture2 {
    assert!(width > 0 && height > 0);

    let mut counts = vec![0u32; width * height];
    for texel in dataset.texture().texels() {
        let u = texel.w;
        let v = texel.xyz().magnitude() / MAX_GRADIENT_MAGNITUDE;
        counts[bucket_of(u, width) + bucket_of(v, height) * width] += 1;
    }

    texture_from_counts(&counts, width, height)
}

/// Maps a normalized coordinate onto a bucket index, clamping strays
/// into the outermost buckets.
fn bucket_of(u: f32, buckets: usize) -> usize {
    let scaled = (u.max(0.0) * buckets as f32) as usize;
    scaled.min(buckets - 1)
}

fn texture_from_counts(counts: &[u32], width: usize, height: usize) -> Texture2 {
    let peak = counts.iter().copied().max().unwrap_or(0);
    let log_peak = ((peak + 1) as f32).log10();

    debug!("Histogram {}x{}, peak bucket {}", width, height, peak);

    let mut texture = Texture2::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let count = counts[x + y * width];
            let intensity = if log_peak > 0.0 {
                ((count + 1) as f32).log10() / log_peak
            } else {
                0.0
            };
            texture.put(x, y, color::mono(intensity, 1.0));
        }
    }
    texture
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;
    use crate::test_helpers::{cube_dataset, solid_dataset};
    use crate::volumetric::VolumeDataset;

    #[test]
    fn same_dataset_same_histogram() {
        let dataset = cube_dataset();

        let first = value_histogram(&dataset, 64);
        let second = value_histogram(&dataset, 64);

        assert_eq!(first, second);
    }

    #[test]
    fn extreme_samples_land_in_outermost_buckets() {
        let dataset = VolumeDataset::from_samples(vector![2, 1, 1], vec![0, 255]).unwrap();

        let histogram = value_histogram(&dataset, 4);

        // 0 maps to bucket 0, 255/255 = 1.0 clamps into the last bucket
        assert!(histogram.texel(0, 0).x > 0.0);
        assert!(histogram.texel(3, 0).x > 0.0);
        assert_eq!(histogram.texel(1, 0).x, 0.0);
        assert_eq!(histogram.texel(2, 0).x, 0.0);
    }

    #[test]
    fn peak_bucket_reaches_full_intensity() {
        let dataset = solid_dataset(vector![2, 2, 2], 9);

        let histogram = value_histogram(&dataset, 8);

        // All 8 samples in one bucket
        let peak = histogram.texel(7, 0);
        assert!((peak.x - 1.0).abs() < f32::EPSILON);
        assert_eq!(peak.w, 1.0);
    }

    #[test]
    fn intensities_stay_in_unit_range() {
        let dataset = cube_dataset();

        for texture in [
            value_histogram(&dataset, DEFAULT_BUCKETS),
            value_gradient_histogram(&dataset, 64, 32),
        ] {
            for texel in texture.texels() {
                assert!(texel.x.is_finite());
                assert!((0.0..=1.0).contains(&texel.x));
                assert_eq!(texel.x, texel.y);
                assert_eq!(texel.x, texel.z);
            }
        }
    }

    #[test]
    fn constant_volume_masses_the_zero_gradient_row() {
        let dataset = solid_dataset(vector![3, 3, 3], 5);

        let histogram = value_gradient_histogram(&dataset, 8, 8);

        // Gradients vanish, so only the bottom row sees any counts
        for y in 1..8 {
            for x in 0..8 {
                assert_eq!(histogram.texel(x, y).x, 0.0);
            }
        }
        assert!((histogram.texel(7, 0).x - 1.0).abs() < f32::EPSILON);
    }
}

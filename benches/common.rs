pub use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub use nalgebra::vector;
pub use vol_tf::{
    color,
    transfer::{TransferFunction1d, TransferFunction2d},
    volumetric::{ImportConfig, SampleFormat, VolumeDataset},
};

pub const VOLUME_SIDE: usize = 32;
pub const SEED: u64 = 7;

pub fn bench_samples() -> Vec<i32> {
    let rng = fastrand::Rng::new();
    rng.seed(SEED);
    (0..VOLUME_SIDE * VOLUME_SIDE * VOLUME_SIDE)
        .map(|_| rng.i32(0..4096))
        .collect()
}

pub fn bench_dataset() -> VolumeDataset {
    let size = vector![VOLUME_SIDE, VOLUME_SIDE, VOLUME_SIDE];
    VolumeDataset::from_samples(size, bench_samples()).unwrap()
}

/// 1D transfer function with a dense stop population.
pub fn dense_tf1d() -> TransferFunction1d {
    let mut tf = TransferFunction1d::new();
    for i in 0..32 {
        let t = i as f32 / 31.0;
        tf.add_color_point(t, color::mono(t, 1.0)).unwrap();
        tf.add_alpha_point(t, t * 0.9).unwrap();
    }
    tf
}

/// 2D transfer function with a stack of overlapping boxes.
pub fn dense_tf2d() -> TransferFunction2d {
    let mut tf = TransferFunction2d::new();
    for i in 0..16 {
        let offset = i as f32 / 40.0;
        tf.add_box(offset, offset, 0.5, 0.5, color::mono(offset, 1.0), 0.5)
            .unwrap();
    }
    tf
}

//! Module with helper functions
//! Saves repetition in unit tests

use byteorder::{ByteOrder, LittleEndian};
use nalgebra::{vector, Vector3};

use crate::volumetric::{ImportConfig, SampleFormat, VolumeDataset};

/// Eight increasing samples, a 2x2x2 gradient cube.
pub fn cube_samples() -> Vec<i32> {
    vec![0, 32, 64, 64 + 32, 128, 128 + 32, 128 + 64, 255]
}

pub fn cube_size() -> Vector3<usize> {
    vector![2, 2, 2]
}

pub fn cube_dataset() -> VolumeDataset {
    VolumeDataset::from_samples(cube_size(), cube_samples()).unwrap()
}

pub fn cube_config(format: SampleFormat) -> ImportConfig {
    ImportConfig::new(cube_size(), format)
}

/// Constant volume of the given size and value.
pub fn solid_dataset(size: Vector3<usize>, value: i32) -> VolumeDataset {
    let data = vec![value; size.x * size.y * size.z];
    VolumeDataset::from_samples(size, data).unwrap()
}

/// Serializes samples in the given format, little-endian.
/// Values outside the format's range wrap.
pub fn encode_samples(samples: &[i32], format: SampleFormat) -> Vec<u8> {
    let width = format.byte_width();
    let mut bytes = vec![0u8; samples.len() * width];

    for (chunk, &sample) in bytes.chunks_exact_mut(width).zip(samples) {
        match format {
            SampleFormat::Int8 => chunk[0] = sample as i8 as u8,
            SampleFormat::Uint8 => chunk[0] = sample as u8,
            SampleFormat::Int16 => LittleEndian::write_i16(chunk, sample as i16),
            SampleFormat::Uint16 => LittleEndian::write_u16(chunk, sample as u16),
            SampleFormat::Int32 => LittleEndian::write_i32(chunk, sample),
            SampleFormat::Uint32 => LittleEndian::write_u32(chunk, sample as u32),
        }
    }

    bytes
}

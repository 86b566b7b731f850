use byteorder::{ByteOrder, LittleEndian};
use nalgebra::Vector3;

use crate::{
    common::ScalarRange,
    error::{Error, Result},
};

/// Element encoding of a raw scan. Fixed width, little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
}

impl SampleFormat {
    /// Bytes per sample.
    pub fn byte_width(&self) -> usize {
        match self {
            SampleFormat::Int8 | SampleFormat::Uint8 => 1,
            SampleFormat::Int16 | SampleFormat::Uint16 => 2,
            SampleFormat::Int32 | SampleFormat::Uint32 => 4,
        }
    }
}

/// Out-of-band description of a raw scan.
///
/// Scan files carry no header of their own. Dimensions, sample
/// encoding and the length of any foreign header to skip all arrive
/// through this config.
#[derive(Debug, Clone, Copy)]
pub struct ImportConfig {
    pub size: Vector3<usize>,
    pub format: SampleFormat,
    pub skip_bytes: usize,
}

impl ImportConfig {
    pub fn new(size: Vector3<usize>, format: SampleFormat) -> ImportConfig {
        ImportConfig {
            size,
            format,
            skip_bytes: 0,
        }
    }

    pub fn with_skip_bytes(mut self, skip_bytes: usize) -> ImportConfig {
        self.skip_bytes = skip_bytes;
        self
    }

    pub fn voxel_count(&self) -> usize {
        self.size.x * self.size.y * self.size.z
    }
}

/// Decodes the scan body into samples, tracking the observed range.
///
/// The body after `skip_bytes` must hold at least `voxel_count` full
/// samples; trailing bytes are ignored. Sample order is x-fastest,
/// then y, then z.
pub(super) fn decode_samples(
    bytes: &[u8],
    config: &ImportConfig,
) -> Result<(Vec<i32>, ScalarRange)> {
    let width = config.format.byte_width();
    let voxels = config.voxel_count();

    let body = bytes.get(config.skip_bytes..).unwrap_or(&[]);
    let available = body.len() / width;
    if available < voxels {
        return Err(Error::Format {
            expected: voxels,
            got: available,
        });
    }

    let mut data = Vec::with_capacity(voxels);
    let mut range = ScalarRange::empty();
    for chunk in body.chunks_exact(width).take(voxels) {
        let sample = match config.format {
            SampleFormat::Int8 => chunk[0] as i8 as i32,
            SampleFormat::Uint8 => chunk[0] as i32,
            SampleFormat::Int16 => LittleEndian::read_i16(chunk) as i32,
            SampleFormat::Uint16 => LittleEndian::read_u16(chunk) as i32,
            SampleFormat::Int32 => LittleEndian::read_i32(chunk),
            // Values above i32::MAX wrap
            SampleFormat::Uint32 => LittleEndian::read_u32(chunk) as i32,
        };
        range.extend(sample);
        data.push(sample);
    }

    Ok((data, range))
}

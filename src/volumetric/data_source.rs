use std::{fs::File, io, path::Path};

use memmap::{Mmap, MmapOptions};

use crate::error::Result;

/// Bytes backing an import, either owned or memory-mapped.
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    pub fn from_file<P>(path: P) -> Result<DataSource>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            let err = io::Error::new(io::ErrorKind::InvalidInput, "path does not lead to a file");
            return Err(err.into());
        }

        let file = File::open(path)?;
        let mmap = unsafe { MmapOptions::new().map(&file) }?;

        Ok(DataSource::Mmap(mmap))
    }
}

mod data_source;
mod dataset;
mod import;

pub use data_source::DataSource;
pub use dataset::VolumeDataset;
pub use import::{ImportConfig, SampleFormat};

//! Dataset input: CSV loading and fingerprinting.

pub mod loaders;

pub use loaders::{dataset_checksum, load_dataset, DatasetError};

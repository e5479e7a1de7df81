//! TIFF writing module
//!
//! Snapshots extracted images to TIFF files.

mod standard_tiff_writer;
pub mod types;
mod writer;

pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, TiffCompression};
pub use writer::TiffWriter;

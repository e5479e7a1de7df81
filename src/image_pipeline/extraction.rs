//! Image extraction module
//!
//! Walks the positional fields of a vision service value and builds an
//! [`ImageDescriptor`](crate::image_pipeline::ImageDescriptor), decoding packed
//! YUV422 buffers on the way. Also hosts the best-effort sequence helpers used
//! for loosely typed telemetry.

mod image_extractor;
mod sequence;
pub mod types;


pub use image_extractor::{ImageExtractor, extract_image};
pub use sequence::{FLOAT_PLACEHOLDER, STRING_PLACEHOLDER, to_float_sequence, to_string_sequence};
pub use types::{ExtractionConfig, ExtractionConfigBuilder, ImageField};

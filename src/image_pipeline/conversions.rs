//! Pipeline conversions module
//!
//! This module contains orchestration logic from service values to image files.

mod image_to_tiff;

#[cfg(test)]
mod tests;

pub use image_to_tiff::ImageToTiffPipeline;

//! Image descriptor module
//!
//! Typed output of the extraction step.

mod colorspace;
pub mod types;

pub use colorspace::{ColorSpace, YUV422_COLORSPACE};
pub use types::{FieldOfView, ImageDescriptor, PixelBuffer, Timestamp};

//! YUV422 decoding module
//!
//! Converts packed 4:2:2 buffers into interleaved RGB.

mod cpu_decoder;
mod decoder;
pub mod types;

pub use cpu_decoder::{CpuYuv422Decoder, deinterlace, yuv_to_rgb_in_place};
pub use decoder::PixelDecoder;
pub use types::{PackedPixelQuad, YuvPixel};

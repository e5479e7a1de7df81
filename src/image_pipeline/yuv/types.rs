//! Types for YUV422 decoding

/// Four packed bytes covering two horizontally adjacent pixels.
///
/// Byte layout is `[Y0, V, Y1, U]`: each pixel keeps its own luma sample and
/// the pair shares the chroma bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedPixelQuad(pub [u8; 4]);

impl PackedPixelQuad {
    /// Reads the quad at the start of `bytes`, `None` if fewer than four remain.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let quad: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        Some(Self(quad))
    }
}

/// One pixel as a `(Y, U, V)` triple, named after the `[Y0, V, Y1, U]` quad.
///
/// [`yuv_to_rgb_in_place`](crate::image_pipeline::yuv::yuv_to_rgb_in_place)
/// works on byte positions: `u` (second byte) is taken as the red-difference
/// term and `v` (third byte) as the blue-difference term. In the common YUYV
/// order (`Y0 Cb Y1 Cr`) that makes `u` the Cr sample and `v` the Cb sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YuvPixel {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl YuvPixel {
    pub fn to_bytes(self) -> [u8; 3] {
        [self.y, self.u, self.v]
    }
}

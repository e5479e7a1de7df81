use tracing::debug;

use crate::image_pipeline::yuv::decoder::PixelDecoder;
use crate::image_pipeline::yuv::types::{PackedPixelQuad, YuvPixel};

const R_COEFF: f32 = 1.403;
const G_COEFF_1: f32 = 0.714;
const G_COEFF_2: f32 = 0.344;
const B_COEFF: f32 = 1.773;
const CHROMA_OFFSET: f32 = 128.0;

/// Splits a packed quad into its two pixels.
///
/// Both pixels share `quad[3]` as U and `quad[1]` as V; `quad[0]` and
/// `quad[2]` are the luma samples of the first and second pixel.
pub fn deinterlace(quad: PackedPixelQuad) -> (YuvPixel, YuvPixel) {
    let [y0, v, y1, u] = quad.0;
    (YuvPixel { y: y0, u, v }, YuvPixel { y: y1, u, v })
}

#[inline]
fn saturate(value: f32) -> u8 {
    // `as` truncates toward zero once the value is inside [0, 255]
    value.clamp(0.0, 255.0) as u8
}

/// Converts `width * height` three-byte pixels from YUV to RGB in place.
///
/// The second byte of each pixel (`YuvPixel::u`) is the red-difference term
/// and the third (`YuvPixel::v`) the blue-difference term.
pub fn yuv_to_rgb_in_place(buffer: &mut [u8], width: usize, height: usize) {
    let pixels = width.saturating_mul(height);
    for px in buffer.chunks_exact_mut(3).take(pixels) {
        let y = px[0] as f32;
        let c1 = px[1] as f32 - CHROMA_OFFSET;
        let c2 = px[2] as f32 - CHROMA_OFFSET;

        let r = y + R_COEFF * c1;
        let g = y - G_COEFF_1 * c1 - G_COEFF_2 * c2;
        let b = y + B_COEFF * c2;

        px[0] = saturate(r);
        px[1] = saturate(g);
        px[2] = saturate(b);
    }
}

/// CPU decoder for the packed YUV422 colorspace.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuYuv422Decoder;

impl CpuYuv422Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl PixelDecoder for CpuYuv422Decoder {
    fn decode(&self, raw: &[u8], width: usize, height: usize) -> Vec<u8> {
        let pixels = width.saturating_mul(height);
        debug!("Decoding YUV422 image {}x{}, {} input bytes", width, height, raw.len());

        let mut rgb = vec![0u8; pixels * 3];
        let quads = raw.chunks_exact(4).filter_map(PackedPixelQuad::from_slice);
        for (quad, out) in quads.zip(rgb.chunks_exact_mut(6)) {
            let (first, second) = deinterlace(quad);
            out[..3].copy_from_slice(&first.to_bytes());
            out[3..].copy_from_slice(&second.to_bytes());
        }

        yuv_to_rgb_in_place(&mut rgb, width, height);
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(y: u8, u: u8, v: u8) -> [u8; 3] {
        let mut px = [y, u, v];
        yuv_to_rgb_in_place(&mut px, 1, 1);
        px
    }

    #[test]
    fn deinterlace_shares_chroma_across_pair() {
        let (a, b) = deinterlace(PackedPixelQuad([10, 200, 50, 100]));
        assert_eq!(a, YuvPixel { y: 10, u: 100, v: 200 });
        assert_eq!(b, YuvPixel { y: 50, u: 100, v: 200 });
    }

    #[test]
    fn second_byte_drives_red_and_third_drives_blue() {
        let (pixel, _) = deinterlace(PackedPixelQuad([100, 128, 100, 228]));
        assert_eq!(pixel, YuvPixel { y: 100, u: 228, v: 128 });

        // r = 100 + 1.403 * 100, g = 100 - 71.4, b = 100
        assert_eq!(convert(pixel.y, pixel.u, pixel.v), [240, 28, 100]);
    }

    #[test]
    fn gray_point_is_unchanged() {
        assert_eq!(convert(128, 128, 128), [128, 128, 128]);
    }

    #[test]
    fn saturated_input_clamps_without_wrapping() {
        // r and b overshoot, g = 255 - 0.714 * 127 - 0.344 * 127 = 120.634
        assert_eq!(convert(255, 255, 255), [255, 120, 255]);
    }

    #[test]
    fn negative_results_clamp_to_zero() {
        // r = -179.584, g = 91.392 + 44.032 = 135.424, b = -226.944
        assert_eq!(convert(0, 0, 0), [0, 135, 0]);
    }

    #[test]
    fn conversion_truncates_instead_of_rounding() {
        // r = 100 + 1.403 * 10 = 114.03, g = 100 - 7.14 + 3.44 = 96.3, b = 100 - 17.73 = 82.27
        assert_eq!(convert(100, 138, 118), [114, 96, 82]);
    }

    #[test]
    fn uniform_macropixels_decode_to_uniform_rgb() {
        let raw: Vec<u8> = [90, 140, 90, 110].repeat(4 * 2 / 2);
        let rgb = CpuYuv422Decoder::new().decode(&raw, 4, 2);

        assert_eq!(rgb.len(), 4 * 2 * 3);
        let expected = convert(90, 110, 140);
        for px in rgb.chunks_exact(3) {
            assert_eq!(px, expected);
        }
    }

    #[test]
    fn each_pair_keeps_its_own_chroma() {
        let raw = [60, 128, 80, 128, 60, 200, 80, 50];
        let rgb = CpuYuv422Decoder::new().decode(&raw, 4, 1);

        assert_eq!(&rgb[0..3], convert(60, 128, 128));
        assert_eq!(&rgb[3..6], convert(80, 128, 128));
        assert_eq!(&rgb[6..9], convert(60, 50, 200));
        assert_eq!(&rgb[9..12], convert(80, 50, 200));
    }

    #[test]
    fn short_input_leaves_remaining_pixels_zero_before_conversion() {
        let raw = [128, 128, 128, 128];
        let rgb = CpuYuv422Decoder::new().decode(&raw, 4, 1);

        assert_eq!(&rgb[0..6], [128, 128, 128, 128, 128, 128]);
        assert_eq!(&rgb[6..9], convert(0, 0, 0));
    }

    #[test]
    fn packed_quad_from_slice_needs_four_bytes() {
        assert_eq!(PackedPixelQuad::from_slice(&[1, 2, 3, 4, 5]), Some(PackedPixelQuad([1, 2, 3, 4])));
        assert_eq!(PackedPixelQuad::from_slice(&[1, 2, 3]), None);
    }
}

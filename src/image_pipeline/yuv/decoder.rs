/// Turns a packed buffer of `width * height` pixels into interleaved RGB.
///
/// Implementations trust the dimensions given by the caller and never fail;
/// pixels not covered by `raw` are left zeroed before color conversion.
pub trait PixelDecoder {
    fn decode(&self, raw: &[u8], width: usize, height: usize) -> Vec<u8>;
}

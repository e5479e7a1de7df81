//! Image descriptor types

use std::time::Duration;

use crate::image_pipeline::image::colorspace::ColorSpace;

/// Pixel data of an extracted image.
///
/// `Borrowed` aliases the raw buffer of the source value; `Owned` holds data
/// decoded during extraction and is released when the descriptor is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer<'a> {
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
}

impl<'a> PixelBuffer<'a> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            PixelBuffer::Borrowed(bytes) => bytes,
            PixelBuffer::Owned(bytes) => bytes.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, PixelBuffer::Owned(_))
    }

    /// Copies borrowed data so the buffer no longer depends on the source value.
    pub fn into_owned(self) -> PixelBuffer<'static> {
        match self {
            PixelBuffer::Borrowed(bytes) => PixelBuffer::Owned(bytes.to_vec()),
            PixelBuffer::Owned(bytes) => PixelBuffer::Owned(bytes),
        }
    }
}

impl AsRef<[u8]> for PixelBuffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Capture time as reported by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub seconds: i32,
    pub microseconds: i32,
}

impl Timestamp {
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.microseconds as f64 * 1e-6
    }

    /// `None` when either component is negative.
    pub fn as_duration(&self) -> Option<Duration> {
        let secs = u64::try_from(self.seconds).ok()?;
        let micros = u64::try_from(self.microseconds).ok()?;
        Some(Duration::from_secs(secs) + Duration::from_micros(micros))
    }
}

/// Field of view bounds of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldOfView {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Image extracted from a vision service value.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor<'a> {
    /// Width of the image in pixels
    pub width: i32,
    /// Height of the image in pixels
    pub height: i32,
    /// Number of layers as reported by the source
    pub layers: i32,
    /// Colorspace tag of the source buffer
    pub colorspace: i32,
    pub timestamp: Timestamp,
    pub buffer: PixelBuffer<'a>,
    pub camera_id: i32,
    pub fov: FieldOfView,
}

impl<'a> ImageDescriptor<'a> {
    pub fn color_space(&self) -> ColorSpace {
        ColorSpace::from_tag(self.colorspace)
    }

    /// True when the buffer holds RGB data decoded during extraction.
    pub fn is_decoded(&self) -> bool {
        self.buffer.is_owned()
    }

    /// Encoding of the pixel buffer as stored, `None` for unknown colorspaces.
    pub fn encoding(&self) -> Option<&'static str> {
        if self.is_decoded() {
            Some("rgb8")
        } else {
            self.color_space().encoding()
        }
    }

    pub fn bytes_per_pixel(&self) -> Option<usize> {
        if self.is_decoded() {
            Some(3)
        } else {
            self.color_space().bytes_per_pixel()
        }
    }

    /// Expected buffer length for the stored layout.
    pub fn expected_len(&self) -> Option<usize> {
        let width = usize::try_from(self.width).ok()?;
        let height = usize::try_from(self.height).ok()?;
        width.checked_mul(height)?.checked_mul(self.bytes_per_pixel()?)
    }

    pub fn into_owned(self) -> ImageDescriptor<'static> {
        ImageDescriptor {
            width: self.width,
            height: self.height,
            layers: self.layers,
            colorspace: self.colorspace,
            timestamp: self.timestamp,
            buffer: self.buffer.into_owned(),
            camera_id: self.camera_id,
            fov: self.fov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(colorspace: i32, buffer: PixelBuffer<'_>) -> ImageDescriptor<'_> {
        ImageDescriptor {
            width: 4,
            height: 2,
            layers: 3,
            colorspace,
            timestamp: Timestamp { seconds: 12, microseconds: 500_000 },
            buffer,
            camera_id: 0,
            fov: FieldOfView::default(),
        }
    }

    #[test]
    fn decoded_buffer_reports_rgb8() {
        let image = descriptor(9, PixelBuffer::Owned(vec![0; 24]));
        assert_eq!(image.encoding(), Some("rgb8"));
        assert_eq!(image.expected_len(), Some(24));
    }

    #[test]
    fn borrowed_buffer_reports_source_layout() {
        let raw = [0u8; 16];
        let image = descriptor(9, PixelBuffer::Borrowed(&raw));
        assert!(!image.is_decoded());
        assert_eq!(image.encoding(), Some("yuv422"));
        assert_eq!(image.expected_len(), Some(raw.len()));
    }

    #[test]
    fn into_owned_copies_borrowed_bytes() {
        let raw = vec![1u8, 2, 3];
        let owned = descriptor(11, PixelBuffer::Borrowed(&raw)).into_owned();
        assert_eq!(owned.buffer, PixelBuffer::Owned(vec![1, 2, 3]));
    }

    #[test]
    fn timestamp_conversions() {
        let ts = Timestamp { seconds: 12, microseconds: 500_000 };
        assert_eq!(ts.as_duration(), Some(Duration::from_millis(12_500)));
        assert!((ts.as_secs_f64() - 12.5).abs() < 1e-9);
        assert_eq!(Timestamp { seconds: -1, microseconds: 0 }.as_duration(), None);
    }
}

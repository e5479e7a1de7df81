//! Extraction configuration types

use crate::image_pipeline::image::YUV422_COLORSPACE;
use crate::image_pipeline::value::ValueKind;

/// Positional fields of an image value, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Width,
    Height,
    Layers,
    Colorspace,
    TimestampSeconds,
    TimestampMicros,
    Buffer,
    CameraId,
    FovLeft,
    FovTop,
    FovRight,
    FovBottom,
}

impl ImageField {
    pub const ALL: [ImageField; 12] = [
        ImageField::Width,
        ImageField::Height,
        ImageField::Layers,
        ImageField::Colorspace,
        ImageField::TimestampSeconds,
        ImageField::TimestampMicros,
        ImageField::Buffer,
        ImageField::CameraId,
        ImageField::FovLeft,
        ImageField::FovTop,
        ImageField::FovRight,
        ImageField::FovBottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ImageField::Width => "width",
            ImageField::Height => "height",
            ImageField::Layers => "number of layers",
            ImageField::Colorspace => "colorspace",
            ImageField::TimestampSeconds => "timestamp_s",
            ImageField::TimestampMicros => "timestamp_us",
            ImageField::Buffer => "buffer",
            ImageField::CameraId => "cam_id",
            ImageField::FovLeft => "fov_left",
            ImageField::FovTop => "fov_top",
            ImageField::FovRight => "fov_right",
            ImageField::FovBottom => "fov_bottom",
        }
    }

    pub fn expected_kind(self) -> ValueKind {
        match self {
            ImageField::Buffer => ValueKind::Raw,
            ImageField::FovLeft | ImageField::FovTop | ImageField::FovRight | ImageField::FovBottom => {
                ValueKind::Float
            }
            _ => ValueKind::Int,
        }
    }
}

/// Configuration for image extraction
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Colorspace tag whose buffers are decoded to RGB
    pub yuv422_colorspace: i32,
    /// Whether to check the packed buffer covers width x height pixels before decoding
    pub validate_buffer: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            yuv422_colorspace: YUV422_COLORSPACE,
            validate_buffer: true,
        }
    }
}

impl ExtractionConfig {
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }
}

/// Builder for ExtractionConfig
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    yuv422_colorspace: Option<i32>,
    validate_buffer: Option<bool>,
}

impl ExtractionConfigBuilder {
    pub fn yuv422_colorspace(mut self, tag: i32) -> Self {
        self.yuv422_colorspace = Some(tag);
        self
    }

    pub fn validate_buffer(mut self, validate: bool) -> Self {
        self.validate_buffer = Some(validate);
        self
    }

    pub fn build(self) -> ExtractionConfig {
        let default = ExtractionConfig::default();
        ExtractionConfig {
            yuv422_colorspace: self.yuv422_colorspace.unwrap_or(default.yuv422_colorspace),
            validate_buffer: self.validate_buffer.unwrap_or(default.validate_buffer),
        }
    }
}

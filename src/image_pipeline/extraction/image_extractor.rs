use tracing::{debug, instrument, warn};

use crate::image_pipeline::common::error::{ExtractionError, Result};
use crate::image_pipeline::extraction::types::{ExtractionConfig, ImageField};
use crate::image_pipeline::image::{FieldOfView, ImageDescriptor, PixelBuffer, Timestamp};
use crate::image_pipeline::value::{DynamicValue, ValueError};
use crate::image_pipeline::yuv::{CpuYuv422Decoder, PixelDecoder};

/// Packed YUV422 stores two bytes per pixel.
const PACKED_BYTES_PER_PIXEL: usize = 2;

pub struct ImageExtractor<D: PixelDecoder> {
    decoder: D,
    config: ExtractionConfig,
}

impl ImageExtractor<CpuYuv422Decoder> {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            decoder: CpuYuv422Decoder::new(),
            config,
        }
    }
}

impl Default for ImageExtractor<CpuYuv422Decoder> {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

/// Extracts an image with the default configuration and the CPU decoder.
pub fn extract_image<V: DynamicValue>(value: &V, colorspace_hint: i32) -> Result<ImageDescriptor<'_>> {
    ImageExtractor::default().extract(value, colorspace_hint)
}

/// Resolves the element for `field` and checks its kind, without coercing.
fn checked<V: DynamicValue>(items: &[V], field: ImageField) -> Result<&V> {
    let element = items
        .get(field.index())
        .ok_or(ExtractionError::MissingField {
            field: field.name(),
            len: items.len(),
        })?
        .content();

    let found = element.kind();
    if found != field.expected_kind() {
        return Err(ExtractionError::FieldKind {
            field: field.name(),
            source: ValueError::KindMismatch {
                expected: field.expected_kind(),
                found,
            },
        });
    }
    Ok(element)
}

fn coerce<T>(field: ImageField, value: std::result::Result<T, ValueError>) -> Result<T> {
    value.map_err(|source| ExtractionError::FieldKind {
        field: field.name(),
        source,
    })
}

fn int_field<V: DynamicValue>(items: &[V], field: ImageField) -> Result<i32> {
    coerce(field, checked(items, field)?.as_i32())
}

fn float_field<V: DynamicValue>(items: &[V], field: ImageField) -> Result<f32> {
    coerce(field, checked(items, field)?.as_f32())
}

fn raw_field<V: DynamicValue>(items: &[V], field: ImageField) -> Result<&[u8]> {
    coerce(field, checked(items, field)?.as_raw())
}

impl<D: PixelDecoder> ImageExtractor<D> {
    pub fn with_custom(decoder: D, config: ExtractionConfig) -> Self {
        Self { decoder, config }
    }

    /// Builds a descriptor from the twelve positional fields of `value`.
    ///
    /// Fails on the first field that is missing or of the wrong kind. Buffers
    /// tagged with the configured YUV422 colorspace are decoded to RGB; any
    /// other buffer is borrowed from `value` as is.
    #[instrument(skip(self, value))]
    pub fn extract<'a, V: DynamicValue>(
        &self,
        value: &'a V,
        colorspace_hint: i32,
    ) -> Result<ImageDescriptor<'a>> {
        let items = value.as_list().map_err(ExtractionError::NotAList)?;
        debug!("Extracting image from {} fields", items.len());

        let width = int_field(items, ImageField::Width)?;
        let height = int_field(items, ImageField::Height)?;
        let layers = int_field(items, ImageField::Layers)?;
        let colorspace = int_field(items, ImageField::Colorspace)?;
        if colorspace != colorspace_hint {
            warn!(
                "Image colorspace {} differs from requested colorspace {}",
                colorspace, colorspace_hint
            );
        }
        let timestamp = Timestamp {
            seconds: int_field(items, ImageField::TimestampSeconds)?,
            microseconds: int_field(items, ImageField::TimestampMicros)?,
        };

        let raw = raw_field(items, ImageField::Buffer)?;
        let buffer = if colorspace == self.config.yuv422_colorspace {
            PixelBuffer::Owned(self.decode(raw, width, height)?)
        } else {
            PixelBuffer::Borrowed(raw)
        };

        let camera_id = int_field(items, ImageField::CameraId)?;
        let fov = FieldOfView {
            left: float_field(items, ImageField::FovLeft)?,
            top: float_field(items, ImageField::FovTop)?,
            right: float_field(items, ImageField::FovRight)?,
            bottom: float_field(items, ImageField::FovBottom)?,
        };

        debug!(
            width,
            height,
            colorspace,
            decoded = buffer.is_owned(),
            "Image extracted"
        );

        Ok(ImageDescriptor {
            width,
            height,
            layers,
            colorspace,
            timestamp,
            buffer,
            camera_id,
            fov,
        })
    }

    fn decode(&self, raw: &[u8], width: i32, height: i32) -> Result<Vec<u8>> {
        let _span = tracing::debug_span!("decode_yuv422", width, height).entered();

        let invalid = || ExtractionError::InvalidDimensions(width.into(), height.into());
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;

        if self.config.validate_buffer {
            let expected = w
                .checked_mul(h)
                .and_then(|pixels| pixels.checked_mul(PACKED_BYTES_PER_PIXEL))
                .ok_or_else(invalid)?;
            if raw.len() < expected {
                return Err(ExtractionError::BufferTooShort {
                    expected,
                    actual: raw.len(),
                });
            }
        }

        Ok(self.decoder.decode(raw, w, h))
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExtractionConfig) {
        self.config = config;
    }
}

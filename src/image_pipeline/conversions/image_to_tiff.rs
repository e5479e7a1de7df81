use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ExtractionError, Result},
    extraction::{ExtractionConfig, ImageExtractor},
    image::ImageDescriptor,
    tiff::{ConversionConfig, StandardTiffWriter, TiffWriter},
    value::DynamicValue,
    yuv::{CpuYuv422Decoder, PixelDecoder},
};

pub struct ImageToTiffPipeline<D: PixelDecoder, W: TiffWriter> {
    extractor: ImageExtractor<D>,
    writer: W,
    config: ConversionConfig,
}

impl ImageToTiffPipeline<CpuYuv422Decoder, StandardTiffWriter> {
    pub fn new(extraction: ExtractionConfig, config: ConversionConfig) -> Self {
        Self {
            extractor: ImageExtractor::new(extraction),
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<D: PixelDecoder, W: TiffWriter> ImageToTiffPipeline<D, W> {
    pub fn with_custom(extractor: ImageExtractor<D>, writer: W, config: ConversionConfig) -> Self {
        Self {
            extractor,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: i32, height: i32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width <= 0 || height <= 0 {
            return Err(ExtractionError::InvalidDimensions(width.into(), height.into()));
        }

        if let Some(max) = self.config.max_dimension {
            if (width as usize) > max || (height as usize) > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ExtractionError::InvalidDimensions(width.into(), height.into()));
            }
        }

        Ok(())
    }

    /// Extracts the image carried by `value` and writes it to `output`.
    #[instrument(skip(self, value, output))]
    pub fn convert<V: DynamicValue>(
        &self,
        value: &V,
        colorspace_hint: i32,
        output: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting image to TIFF conversion");

        let image: ImageDescriptor<'_> = {
            let _span = tracing::info_span!("extract_image").entered();
            self.extractor.extract(value, colorspace_hint)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width,
                height = image.height
            ).entered();
            self.validate_dimensions(image.width, image.height)?;
        }

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            camera_id = image.camera_id,
            decoded = image.is_decoded(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, value, output_path))]
    pub fn convert_to_file<V: DynamicValue, P: AsRef<Path>>(
        &self,
        value: &V,
        colorspace_hint: i32,
        output_path: P,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        info!(output = %output_path.display(), "Converting image to file");

        // Nothing touches the filesystem until encoding has succeeded
        let mut encoded: Vec<u8> = Vec::new();
        self.convert(value, colorspace_hint, &mut encoded)?;

        let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
        std::fs::write(output_path, &encoded).map_err(|e| {
            ExtractionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }

    pub fn extractor(&self) -> &ImageExtractor<D> {
        &self.extractor
    }
}

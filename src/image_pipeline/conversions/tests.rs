use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::common::error::{ExtractionError, Result};
use crate::image_pipeline::conversions::ImageToTiffPipeline;
use crate::image_pipeline::extraction::{ExtractionConfig, ImageExtractor};
use crate::image_pipeline::image::{ImageDescriptor, YUV422_COLORSPACE};
use crate::image_pipeline::tiff::{ConversionConfig, TiffCompression, TiffWriter};
use crate::image_pipeline::value::Value;

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<ImageDescriptor<'static>>>>,
}

impl TiffWriter for MockWriter {
    fn write_tiff(&self, image: &ImageDescriptor<'_>, _output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        if self.should_fail {
            return Err(ExtractionError::EncodeError("Mock encode error".to_string()));
        }
        self.written.lock().unwrap().push(image.clone().into_owned());
        Ok(())
    }
}

fn yuv_value(width: i32, height: i32) -> Value {
    let pixels = (width.max(0) * height.max(0)) as usize;
    Value::List(vec![
        Value::from(width),
        Value::from(height),
        Value::from(2),
        Value::from(YUV422_COLORSPACE),
        Value::from(10),
        Value::from(0),
        Value::from([128u8, 128, 128, 128].repeat(pixels / 2)),
        Value::from(0),
        Value::from(0.0f32),
        Value::from(0.0f32),
        Value::from(1.0f32),
        Value::from(1.0f32),
    ])
}

fn mock_pipeline(
    should_fail: bool,
    config: ConversionConfig,
) -> (
    ImageToTiffPipeline<crate::image_pipeline::yuv::CpuYuv422Decoder, MockWriter>,
    Arc<Mutex<Vec<ImageDescriptor<'static>>>>,
) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter {
        should_fail,
        written: written.clone(),
    };
    let extractor = ImageExtractor::new(ExtractionConfig::default());
    (ImageToTiffPipeline::with_custom(extractor, writer, config), written)
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .compression(TiffCompression::Lzw)
        .validate_dimensions(false)
        .max_dimension(Some(10000))
        .build();

    assert!(matches!(config.compression, TiffCompression::Lzw));
    assert!(!config.validate_dimensions);
    assert_eq!(config.max_dimension, Some(10000));
}

#[test]
fn test_successful_conversion_writes_decoded_image() {
    let (pipeline, written) = mock_pipeline(false, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    pipeline.convert(&yuv_value(4, 2), YUV422_COLORSPACE, &mut output).unwrap();

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].is_decoded());
    assert_eq!(written[0].buffer.as_slice(), [128u8; 24]);
}

#[test]
fn test_extraction_failure_skips_writer() {
    let (pipeline, written) = mock_pipeline(false, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&Value::from("garbage"), YUV422_COLORSPACE, &mut output);

    assert!(matches!(result.unwrap_err(), ExtractionError::NotAList(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let (pipeline, _) = mock_pipeline(true, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&yuv_value(4, 2), YUV422_COLORSPACE, &mut output);

    assert!(matches!(result.unwrap_err(), ExtractionError::EncodeError(_)));
}

#[test]
fn test_dimension_validation_failure() {
    let config = ConversionConfig::builder().max_dimension(Some(2)).build();
    let (pipeline, written) = mock_pipeline(false, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&yuv_value(4, 2), YUV422_COLORSPACE, &mut output);

    assert!(matches!(result.unwrap_err(), ExtractionError::InvalidDimensions(4, 2)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_empty_image_rejected_unless_validation_disabled() {
    let (pipeline, _) = mock_pipeline(false, ConversionConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&yuv_value(0, 2), YUV422_COLORSPACE, &mut output);
    assert!(matches!(result.unwrap_err(), ExtractionError::InvalidDimensions(0, 2)));

    let config = ConversionConfig::builder().validate_dimensions(false).build();
    let (pipeline, written) = mock_pipeline(false, config);
    pipeline.convert(&yuv_value(0, 2), YUV422_COLORSPACE, &mut output).unwrap();
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_convert_to_file_writes_tiff() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.tiff");
    let pipeline = ImageToTiffPipeline::new(ExtractionConfig::default(), ConversionConfig::default());

    pipeline.convert_to_file(&yuv_value(4, 2), YUV422_COLORSPACE, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*"));
}

#[test]
fn test_convert_to_file_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("frame.tiff");
    let pipeline = ImageToTiffPipeline::new(ExtractionConfig::default(), ConversionConfig::default());

    let result = pipeline.convert_to_file(&yuv_value(4, 2), YUV422_COLORSPACE, &path);

    assert!(matches!(result.unwrap_err(), ExtractionError::OutputWriteError(_)));
}

#[test]
fn test_failed_conversion_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.tiff");
    let pipeline = ImageToTiffPipeline::new(ExtractionConfig::default(), ConversionConfig::default());

    let result = pipeline.convert_to_file(&Value::from("garbage"), YUV422_COLORSPACE, &path);
    assert!(matches!(result.unwrap_err(), ExtractionError::NotAList(_)));
    assert!(!path.exists());

    let config = ConversionConfig::builder().max_dimension(Some(2)).build();
    let pipeline = ImageToTiffPipeline::new(ExtractionConfig::default(), config);
    let result = pipeline.convert_to_file(&yuv_value(4, 2), YUV422_COLORSPACE, &path);
    assert!(matches!(result.unwrap_err(), ExtractionError::InvalidDimensions(4, 2)));
    assert!(!path.exists());
}

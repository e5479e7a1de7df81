use anyhow::Context;
use naoqi_image_rs::image_pipeline::{
    ConversionConfig, ExtractionConfig, ImageToTiffPipeline, TiffCompression, Value, YUV422_COLORSPACE,
};
use naoqi_image_rs::logger;

use tracing::{error, info};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 480;

/// Wraps a packed frame in the positional layout returned by the vision service.
fn image_value(raw: Vec<u8>) -> Value {
    Value::List(vec![
        Value::from(WIDTH),
        Value::from(HEIGHT),
        Value::from(2),
        Value::from(YUV422_COLORSPACE),
        Value::from(0),
        Value::from(0),
        Value::from(raw),
        Value::from(0),
        Value::from(0.0f32),
        Value::from(0.0f32),
        Value::from(1.0f32),
        Value::from(1.0f32),
    ])
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting naoqi_image...");

    let config = ConversionConfig::builder()
        .compression(TiffCompression::DeflateBalanced)
        .build();
    let pipeline = ImageToTiffPipeline::new(ExtractionConfig::default(), config);

    info!("Image to TIFF pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);

    let raw = std::fs::read("input.yuv").context("reading input.yuv")?;
    let value = image_value(raw);

    match pipeline.convert_to_file(&value, YUV422_COLORSPACE, "output.tiff") {
        Ok(_) => info!("Conversion successful!"),
        Err(e) => error!("Conversion failed: {}", e),
    }

    Ok(())
}

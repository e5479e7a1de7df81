use std::io::Write;

use tiff::encoder::colortype::{ColorType, Gray16, Gray8, RGB8};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder, TiffValue};
use tracing::debug;

use crate::image_pipeline::common::error::{ExtractionError, Result};
use crate::image_pipeline::image::{ColorSpace, ImageDescriptor};
use crate::image_pipeline::tiff::types::{ConversionConfig, TiffCompression};
use crate::image_pipeline::tiff::writer::TiffWriter;

pub struct StandardTiffWriter;

fn compression(config: &ConversionConfig) -> Compression {
    match config.compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
        TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
    }
}

fn encode<C>(width: u32, height: u32, data: &[C::Inner], config: &ConversionConfig) -> Result<Vec<u8>>
where
    C: ColorType,
    [C::Inner]: TiffValue,
{
    let mut buffer = Vec::new();
    TiffEncoder::new(std::io::Cursor::new(&mut buffer))
        .map_err(|e| ExtractionError::EncodeError(e.to_string()))?
        .with_compression(compression(config))
        .write_image::<C>(width, height, data)
        .map_err(|e| ExtractionError::EncodeError(e.to_string()))?;
    Ok(buffer)
}

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, image: &ImageDescriptor<'_>, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);

        let expected = image.expected_len().ok_or_else(|| {
            ExtractionError::UnsupportedFormat(format!("colorspace {}", image.colorspace))
        })?;
        let data = image.buffer.as_slice();
        if data.len() < expected {
            return Err(ExtractionError::BufferTooShort {
                expected,
                actual: data.len(),
            });
        }
        let data = &data[..expected];
        let (width, height) = (image.width as u32, image.height as u32);

        let buffer = if image.is_decoded() {
            encode::<RGB8>(width, height, data, config)?
        } else {
            match image.color_space() {
                ColorSpace::Rgb => encode::<RGB8>(width, height, data, config)?,
                ColorSpace::Bgr => {
                    let rgb: Vec<u8> = data
                        .chunks_exact(3)
                        .flat_map(|px| [px[2], px[1], px[0]])
                        .collect();
                    encode::<RGB8>(width, height, &rgb, config)?
                }
                ColorSpace::Luma => encode::<Gray8>(width, height, data, config)?,
                ColorSpace::Depth | ColorSpace::Infrared | ColorSpace::Distance | ColorSpace::RawDepth => {
                    let samples: Vec<u16> = data
                        .chunks_exact(2)
                        .map(|b| u16::from_le_bytes([b[0], b[1]]))
                        .collect();
                    encode::<Gray16>(width, height, &samples, config)?
                }
                other => {
                    return Err(ExtractionError::UnsupportedFormat(format!(
                        "{:?} buffers cannot be written as TIFF",
                        other
                    )));
                }
            }
        };

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

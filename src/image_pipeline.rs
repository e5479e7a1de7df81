//! Image processing pipeline module
//!
//! This module turns the runtime-typed image values returned by the vision
//! service into typed descriptors, decoding packed YUV422 buffers to RGB, and
//! can snapshot the result to TIFF.

pub mod common;
pub mod conversions;
pub mod extraction;
pub mod image;
pub mod tiff;
pub mod value;
pub mod yuv;

pub use common::{
    ExtractionError,
    Result,
};

pub use value::{
    DynamicValue,
    Value,
    ValueError,
    ValueKind,
};

pub use image::{
    ColorSpace,
    FieldOfView,
    ImageDescriptor,
    PixelBuffer,
    Timestamp,
    YUV422_COLORSPACE,
};

pub use yuv::{
    CpuYuv422Decoder,
    PackedPixelQuad,
    PixelDecoder,
    YuvPixel,
    deinterlace,
    yuv_to_rgb_in_place,
};

pub use extraction::{
    ExtractionConfig,
    ExtractionConfigBuilder,
    ImageExtractor,
    ImageField,
    FLOAT_PLACEHOLDER,
    STRING_PLACEHOLDER,
    extract_image,
    to_float_sequence,
    to_string_sequence,
};

pub use self::tiff::{
    ConversionConfig,
    ConversionConfigBuilder,
    StandardTiffWriter,
    TiffCompression,
    TiffWriter,
};

pub use conversions::{
    ImageToTiffPipeline,
};

use thiserror::Error;

use crate::image_pipeline::value::ValueError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Could not transform value into list: {0}")]
    NotAList(#[source] ValueError),

    #[error("Could not retrieve {field}: sequence has only {len} elements")]
    MissingField { field: &'static str, len: usize },

    #[error("Could not retrieve {field}: {source}")]
    FieldKind {
        field: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i64, i64),

    #[error("Could not retrieve buffer: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Unsupported pixel layout: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExtractionError {
    /// Name of the descriptor field that could not be retrieved, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ExtractionError::MissingField { field, .. } | ExtractionError::FieldKind { field, .. } => {
                Some(*field)
            }
            ExtractionError::BufferTooShort { .. } => Some("buffer"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

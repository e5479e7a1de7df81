//! Common utilities module
//!
//! This module contains the error type shared across the image pipeline.

pub mod error;

pub use error::{ExtractionError, Result};

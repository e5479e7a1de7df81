use tracing::warn;

use crate::image_pipeline::common::error::{ExtractionError, Result};
use crate::image_pipeline::value::DynamicValue;

/// Stands in for elements that cannot be read as a float.
pub const FLOAT_PLACEHOLDER: f32 = -1.0;

/// Stands in for elements that cannot be read as a string.
pub const STRING_PLACEHOLDER: &str = "Not available";

/// Converts every element of a list value to `f32`.
///
/// Only a non-list `value` is an error. Elements that do not convert are
/// logged and replaced with [`FLOAT_PLACEHOLDER`].
pub fn to_float_sequence<V: DynamicValue>(value: &V) -> Result<Vec<f32>> {
    let items = value.as_list().map_err(ExtractionError::NotAList)?;
    let floats = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.to_f32().unwrap_or_else(|e| {
                warn!(index, "{} => set to {}", e, FLOAT_PLACEHOLDER);
                FLOAT_PLACEHOLDER
            })
        })
        .collect();
    Ok(floats)
}

/// Converts every element of a list value to `String`.
///
/// Same policy as [`to_float_sequence`], with [`STRING_PLACEHOLDER`].
pub fn to_string_sequence<V: DynamicValue>(value: &V) -> Result<Vec<String>> {
    let items = value.as_list().map_err(ExtractionError::NotAList)?;
    let strings = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.to_string_value().unwrap_or_else(|e| {
                warn!(index, "{} => set to '{}'", e, STRING_PLACEHOLDER);
                STRING_PLACEHOLDER.to_owned()
            })
        })
        .collect();
    Ok(strings)
}

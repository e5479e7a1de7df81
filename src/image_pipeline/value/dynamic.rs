use crate::image_pipeline::value::error::ValueError;
use crate::image_pipeline::value::types::{Value, ValueKind};

/// Interface the extractor consumes from a runtime-typed value container.
///
/// Strict accessors (`as_*`) only succeed when the value's own kind matches.
/// Lenient conversions (`to_*`) are used for loosely typed telemetry.
pub trait DynamicValue: Sized {
    /// Returns the innermost value, peeling any dynamic wrappers.
    fn content(&self) -> &Self;

    fn kind(&self) -> ValueKind;

    /// Views the value as an ordered list of elements.
    fn as_list(&self) -> Result<&[Self], ValueError>;

    fn as_i32(&self) -> Result<i32, ValueError>;

    fn as_f32(&self) -> Result<f32, ValueError>;

    fn as_raw(&self) -> Result<&[u8], ValueError>;

    fn to_f32(&self) -> Result<f32, ValueError>;

    fn to_string_value(&self) -> Result<String, ValueError>;
}

fn mismatch(expected: ValueKind, found: ValueKind) -> ValueError {
    ValueError::KindMismatch { expected, found }
}

impl DynamicValue for Value {
    fn content(&self) -> &Self {
        let mut current = self;
        while let Value::Dynamic(inner) = current {
            current = inner.as_ref();
        }
        current
    }

    fn kind(&self) -> ValueKind {
        match self {
            Value::Void => ValueKind::Void,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Raw(_) => ValueKind::Raw,
            Value::List(_) => ValueKind::List,
            Value::Dynamic(_) => ValueKind::Dynamic,
        }
    }

    fn as_list(&self) -> Result<&[Self], ValueError> {
        match self.content() {
            Value::List(items) => Ok(items.as_slice()),
            other => Err(mismatch(ValueKind::List, other.kind())),
        }
    }

    fn as_i32(&self) -> Result<i32, ValueError> {
        match self {
            Value::Int(v) => i32::try_from(*v).map_err(|_| ValueError::IntOutOfRange(*v)),
            other => Err(mismatch(ValueKind::Int, other.kind())),
        }
    }

    fn as_f32(&self) -> Result<f32, ValueError> {
        match self {
            Value::Float(v) => Ok(*v as f32),
            other => Err(mismatch(ValueKind::Float, other.kind())),
        }
    }

    fn as_raw(&self) -> Result<&[u8], ValueError> {
        match self {
            Value::Raw(bytes) => Ok(bytes.as_slice()),
            other => Err(mismatch(ValueKind::Raw, other.kind())),
        }
    }

    fn to_f32(&self) -> Result<f32, ValueError> {
        match self.content() {
            Value::Int(v) => Ok(*v as f32),
            Value::Float(v) => Ok(*v as f32),
            other => Err(ValueError::NotConvertibleToFloat(other.kind())),
        }
    }

    fn to_string_value(&self) -> Result<String, ValueError> {
        match self.content() {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValueError::NotConvertibleToString(other.kind())),
        }
    }
}

use thiserror::Error;

use crate::image_pipeline::value::types::ValueKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    KindMismatch { expected: ValueKind, found: ValueKind },

    #[error("integer {0} does not fit in 32 bits")]
    IntOutOfRange(i64),

    #[error("cannot convert {0} to float")]
    NotConvertibleToFloat(ValueKind),

    #[error("cannot convert {0} to string")]
    NotConvertibleToString(ValueKind),
}

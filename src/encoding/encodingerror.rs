use thiserror::Error;

use crate::math::fixedpoint::fixedpointerror::FixedPointError;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("fixed array '{name}' needs {expected} elements, got {actual}")]
    FixedArrayLength { name: &'static str, expected: usize, actual: usize },

    #[error("row {row}: expected 6 fields, found {found}")]
    FieldCount { row: usize, found: usize },

    #[error("row {row}, field {field}: {source}")]
    MalformedField { row: usize, field: usize, source: FixedPointError },

    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

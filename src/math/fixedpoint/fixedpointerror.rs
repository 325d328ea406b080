use num_bigint::ParseBigIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FixedPointError {
    #[error("cannot convert non-finite value {value} to fixed point")]
    NonFinite { value: f64 },

    #[error("fixed-point value needs {bits} bits, which exceeds the signed 256-bit range")]
    Overflow { bits: u64 },

    #[error("invalid fixed-point integer: {0}")]
    Parse(#[from] ParseBigIntError),
}

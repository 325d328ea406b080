use std::fmt::Display;
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::math::fixedpoint::fixedpointerror::FixedPointError;

/// Number of decimal digits behind the point (WAD scale, 10^18).
pub const WAD_DECIMALS: u32 = 18;

/// Width of the signed integer the external evaluator works with.
pub const INTEGER_BITS: u32 = 256;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i64 = 1075;

fn wad() -> BigInt {
    BigInt::from(10u64.pow(WAD_DECIMALS))
}

/// Splits a finite `f64` into `(negative, mantissa, exponent)` with
/// `|value| = mantissa * 2^exponent` exactly.
fn decompose(value: f64) -> (bool, u64, i64) {
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let exponent_bits = ((bits >> MANTISSA_BITS) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);
    if exponent_bits == 0 {
        // subnormal
        (negative, fraction, 1 - EXPONENT_BIAS)
    } else {
        (negative, fraction | (1u64 << MANTISSA_BITS), exponent_bits - EXPONENT_BIAS)
    }
}

/// A real number stored as an integer multiple of 10^-18, limited to the
/// signed 256-bit range.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPoint {
    raw: BigInt,
}

impl FixedPoint {
    pub fn zero() -> FixedPoint {
        FixedPoint { raw: BigInt::zero() }
    }

    /// `trunc(value * 10^18)`, computed without any intermediate rounding.
    ///
    /// The binary64 input is an exact dyadic rational, so the product with
    /// 10^18 is formed on big integers and only the final shift truncates.
    pub fn from_f64(value: f64) -> Result<FixedPoint, FixedPointError> {
        if !value.is_finite() {
            return Err(FixedPointError::NonFinite { value });
        }

        let (negative, mantissa, exponent) = decompose(value);
        let scaled = BigInt::from(mantissa) * wad();
        let magnitude = if exponent >= 0 {
            scaled << (exponent as usize)
        } else {
            // right shift of a non-negative integer truncates toward zero
            scaled >> (exponent.unsigned_abs() as usize)
        };
        let raw = if negative { -magnitude } else { magnitude };
        FixedPoint::from_raw(raw)
    }

    /// Wraps an already-scaled integer, checking that it fits in 256 bits.
    pub fn from_raw(raw: BigInt) -> Result<FixedPoint, FixedPointError> {
        let limit = BigInt::one() << (INTEGER_BITS - 1) as usize;
        if raw >= limit || raw < -limit {
            return Err(FixedPointError::Overflow { bits: raw.bits() + 1 });
        }
        Ok(FixedPoint { raw })
    }

    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn is_negative(&self) -> bool {
        self.raw.sign() == Sign::Minus
    }

    /// Nearest `f64` to the represented value.
    pub fn to_f64(&self) -> f64 {
        // every 256-bit integer is within f64 range
        self.raw.to_f64().unwrap_or(f64::NAN) / 1e18
    }

    /// Exact decimal form, available while the raw integer fits in 96 bits.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let raw = self.raw.to_i128()?;
        Decimal::try_from_i128_with_scale(raw, WAD_DECIMALS).ok()
    }

    /// Distance to `other` in units of 10^-18.
    pub fn ulps_from(&self, other: &FixedPoint) -> BigInt {
        (&self.raw - &other.raw).abs()
    }
}

impl Display for FixedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for FixedPoint {
    type Err = FixedPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = BigInt::from_str(s.trim())?;
        FixedPoint::from_raw(raw)
    }
}

use thiserror::Error;

use crate::encoding::encodingerror::EncodingError;
use crate::math::curve::splineerror::SplineError;
use crate::math::fixedpoint::fixedpointerror::FixedPointError;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("spline construction failed: {0}")]
    Spline(#[from] SplineError),

    #[error("fixed-point conversion failed: {0}")]
    FixedPoint(#[from] FixedPointError),

    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("could not draw pairwise distinct knot x-values after {attempts} attempts")]
    DegenerateKnots { attempts: usize },

    #[error("segment table is empty")]
    EmptyTable,

    #[error("segment {index} does not start where the previous segment ends")]
    NonContiguousTable { index: usize },

    #[error("segment {index} has an empty or reversed interval")]
    EmptySegment { index: usize },
}

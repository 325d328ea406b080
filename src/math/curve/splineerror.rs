use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SplineError {
    #[error("a spline needs at least 2 knots, got {count}")]
    InsufficientKnots { count: usize },

    #[error("knot {index} has a non-finite coordinate")]
    NonFiniteKnot { index: usize },

    #[error("knot x-values must be strictly increasing, knot {index} is not greater than its predecessor")]
    NonIncreasingKnots { index: usize },

    #[error("interval {index} has width {width:e}, too narrow relative to the knot span {span:e}")]
    IllConditioned { index: usize, width: f64, span: f64 },

    #[error("tridiagonal pivot vanished at row {row}")]
    VanishingPivot { row: usize },

    #[error("segment {segment} has a non-finite coefficient")]
    NonFiniteCoefficient { segment: usize },
}

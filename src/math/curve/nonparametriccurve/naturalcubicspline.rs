use log::debug;
use nalgebra::DVector;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};
use crate::math::curve::nonparametriccurve::segmentlocator::locate_segment;
use crate::math::curve::splineerror::SplineError;

/// Interval widths below this fraction of the knot span are rejected.
pub const MIN_RELATIVE_WIDTH: f64 = 1e-12;

// ─────────────────────────────────────────────
// CubicSegment
// ─────────────────────────────────────────────

/// One cubic piece of the spline, stored in Horner order `[c3, c2, c1, c0]`:
///   S_i(x) = c3*(x-x_i)^3 + c2*(x-x_i)^2 + c1*(x-x_i) + c0
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSegment {
    coefs: [f64; 4],
    lhs_x: f64,
    rhs_x: f64,
}

impl CubicSegment {
    pub fn new(coefs: [f64; 4], lhs_x: f64, rhs_x: f64) -> CubicSegment {
        CubicSegment { coefs, lhs_x, rhs_x }
    }

    pub fn coefs(&self) -> &[f64; 4] {
        &self.coefs
    }

    pub fn lhs_x(&self) -> f64 {
        self.lhs_x
    }

    pub fn rhs_x(&self) -> f64 {
        self.rhs_x
    }

    pub fn value(&self, x: f64) -> f64 {
        horner(&self.coefs, x - self.lhs_x)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let [d, c, b, _] = self.coefs;
        horner(&[3.0 * d, 2.0 * c, b], x - self.lhs_x)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let [d, c, _, _] = self.coefs;
        horner(&[6.0 * d, 2.0 * c], x - self.lhs_x)
    }
}

fn horner(coefs: &[f64], x_diff: f64) -> f64 {
    let mut result = coefs[0];
    for &beta in &coefs[1..] {
        result = f64::mul_add(result, x_diff, beta);
    }
    result
}

// ─────────────────────────────────────────────
// Natural boundary system
// ─────────────────────────────────────────────
//
// Unknowns are the second derivatives (moments) m[0..=n], with m[0] = m[n] = 0.
// Interior rows come from C¹ continuity:
//   h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1]
//     = 6*( (y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1] )
// The system is tridiagonal: one forward sweep, then back substitution.

fn interval_widths(points: &[Point2D]) -> Result<DVector<f64>, SplineError> {
    if points.len() < 2 {
        return Err(SplineError::InsufficientKnots { count: points.len() });
    }
    if let Some(index) = points.iter().position(|pt| !pt.is_finite()) {
        return Err(SplineError::NonFiniteKnot { index });
    }

    let n = points.len() - 1;
    let h = DVector::from_fn(n, |i, _| points[i + 1].x() - points[i].x());
    if let Some(i) = h.iter().position(|&width| width <= 0.0) {
        return Err(SplineError::NonIncreasingKnots { index: i + 1 });
    }

    let span = points[n].x() - points[0].x();
    if let Some(i) = h.iter().position(|&width| width < span * MIN_RELATIVE_WIDTH) {
        return Err(SplineError::IllConditioned { index: i, width: h[i], span });
    }
    Ok(h)
}

fn solve_natural_moments(points: &[Point2D], h: &DVector<f64>) -> Result<DVector<f64>, SplineError> {
    let n = h.len();
    let mut m = DVector::<f64>::zeros(n + 1);
    if n < 2 {
        // single interval: both moments are boundary values
        return Ok(m);
    }

    // row k of the reduced system holds the equation for m[k + 1]
    let size = n - 1;
    let mut c_prime = DVector::<f64>::zeros(size);
    let mut d_prime = DVector::<f64>::zeros(size);

    for k in 0..size {
        let i = k + 1;
        let sub = h[i - 1];
        let diag = 2.0 * (h[i - 1] + h[i]);
        let sup = h[i];
        let rhs = 6.0 * (
            Point2D::slope(&points[i], &points[i + 1])
          - Point2D::slope(&points[i - 1], &points[i])
        );

        let (pivot, carried) = if k == 0 {
            (diag, 0.0)
        } else {
            (diag - sub * c_prime[k - 1], sub * d_prime[k - 1])
        };
        if !(pivot > diag * f64::EPSILON) {
            return Err(SplineError::VanishingPivot { row: i });
        }
        c_prime[k] = sup / pivot;
        d_prime[k] = (rhs - carried) / pivot;
    }

    m[size] = d_prime[size - 1];
    for k in (0..(size - 1)).rev() {
        m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
    }
    Ok(m)
}

/// Per-interval coefficients `[c3, c2, c1, c0]` from the moments.
fn cubic_coefs_from_moments(
    points: &[Point2D],
    h: &DVector<f64>,
    m: &DVector<f64>,
) -> Result<Vec<[f64; 4]>, SplineError> {
    (0..h.len())
        .map(|i| {
            let d = (m[i + 1] - m[i]) / (6.0 * h[i]);
            let c = m[i] / 2.0;
            let b = (points[i + 1].y() - points[i].y()) / h[i]
                  - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0;
            let a = points[i].y();
            let coefs = [d, c, b, a];
            if coefs.iter().all(|v| v.is_finite()) {
                Ok(coefs)
            } else {
                Err(SplineError::NonFiniteCoefficient { segment: i })
            }
        })
        .collect()
}

// ─────────────────────────────────────────────
// NaturalCubicSpline
// ─────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct NaturalCubicSpline {
    points: Vec<Point2D>,
    knots_x: Vec<f64>,
    moments: Vec<f64>,
    segment_list: Vec<CubicSegment>,
}

impl NaturalCubicSpline {
    /// Builds the spline through `points`, which must have strictly increasing x.
    pub fn new(points: Vec<Point2D>) -> Result<NaturalCubicSpline, SplineError> {
        let h = interval_widths(&points)?;
        let m = solve_natural_moments(&points, &h)?;
        let coef_list = cubic_coefs_from_moments(&points, &h, &m)?;

        let segment_list = coef_list
            .into_iter()
            .enumerate()
            .map(|(i, coefs)| CubicSegment::new(coefs, points[i].x(), points[i + 1].x()))
            .collect::<Vec<_>>();
        let knots_x = points.iter().map(Point2D::x).collect();

        debug!(
            "natural cubic spline over {} segments on [{}, {}]",
            segment_list.len(),
            points[0].x(),
            points[points.len() - 1].x()
        );

        Ok(NaturalCubicSpline {
            points,
            knots_x,
            moments: m.iter().copied().collect(),
            segment_list,
        })
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segment_list
    }

    pub fn segment_count(&self) -> usize {
        self.segment_list.len()
    }

    /// Second derivatives at the knots; the first and last are exactly zero.
    pub fn moments(&self) -> &[f64] {
        &self.moments
    }

    pub fn knots_x(&self) -> &[f64] {
        &self.knots_x
    }

    pub fn find_segment(&self, x: f64) -> usize {
        locate_segment(&self.knots_x, &x)
    }
}

// ─────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────

impl NonparametricCurve for NaturalCubicSpline {
    fn points(&self) -> &[Point2D] {
        &self.points
    }

    fn min_x(&self) -> f64 {
        self.knots_x[0]
    }

    fn max_x(&self) -> f64 {
        self.knots_x[self.knots_x.len() - 1]
    }
}

impl Curve for NaturalCubicSpline {
    fn value(&self, x: f64) -> f64 {
        self.segment_list[self.find_segment(x)].value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.segment_list[self.find_segment(x)].derivative(x)
    }

    fn second_derivative(&self, x: f64) -> f64 {
        self.segment_list[self.find_segment(x)].second_derivative(x)
    }
}

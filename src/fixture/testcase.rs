use crate::fixture::segmenttable::SegmentTable;
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::naturalcubicspline::{
    CubicSegment,
    NaturalCubicSpline
};
use crate::math::fixedpoint::fixedpoint::FixedPoint;
use crate::math::fixedpoint::fixedpointerror::FixedPointError;

/// A spline segment as the evaluator receives it: `[c3, c2, c1, c0]` and the
/// interval bounds, all at WAD scale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSegment {
    coefs: [FixedPoint; 4],
    x_start: FixedPoint,
    x_end: FixedPoint,
}

impl FixedSegment {
    pub fn new(coefs: [FixedPoint; 4], x_start: FixedPoint, x_end: FixedPoint) -> FixedSegment {
        FixedSegment { coefs, x_start, x_end }
    }

    pub fn from_segment(segment: &CubicSegment) -> Result<FixedSegment, FixedPointError> {
        let [d, c, b, a] = *segment.coefs();
        Ok(FixedSegment {
            coefs: [
                FixedPoint::from_f64(d)?,
                FixedPoint::from_f64(c)?,
                FixedPoint::from_f64(b)?,
                FixedPoint::from_f64(a)?,
            ],
            x_start: FixedPoint::from_f64(segment.lhs_x())?,
            x_end: FixedPoint::from_f64(segment.rhs_x())?,
        })
    }

    pub fn coefs(&self) -> &[FixedPoint; 4] {
        &self.coefs
    }

    pub fn x_start(&self) -> &FixedPoint {
        &self.x_start
    }

    pub fn x_end(&self) -> &FixedPoint {
        &self.x_end
    }

    /// Row order `[c3, c2, c1, c0, x_start, x_end]`.
    pub fn fields(&self) -> [&FixedPoint; 6] {
        let [d, c, b, a] = &self.coefs;
        [d, c, b, a, &self.x_start, &self.x_end]
    }

    pub fn contains(&self, x: &FixedPoint) -> bool {
        &self.x_start <= x && x <= &self.x_end
    }
}

pub fn fixed_segments(spline: &NaturalCubicSpline) -> Result<Vec<FixedSegment>, FixedPointError> {
    spline.segments().iter().map(FixedSegment::from_segment).collect()
}

/// A query and the answer the evaluator has to reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    x: FixedPoint,
    y: FixedPoint,
    index: usize,
}

impl TestCase {
    pub fn new(x: FixedPoint, y: FixedPoint, index: usize) -> TestCase {
        TestCase { x, y, index }
    }

    /// Evaluates `spline` at `x`. The index is located on the truncated
    /// `x` against the fixed-point bounds of `table`, as the evaluator does.
    pub fn evaluate(spline: &NaturalCubicSpline, table: &SegmentTable, x: f64) -> Result<TestCase, FixedPointError> {
        let y = FixedPoint::from_f64(spline.value(x))?;
        let x = FixedPoint::from_f64(x)?;
        let index = table.locate(&x);
        Ok(TestCase { x, y, index })
    }

    pub fn x(&self) -> &FixedPoint {
        &self.x
    }

    pub fn y(&self) -> &FixedPoint {
        &self.y
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

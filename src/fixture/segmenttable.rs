use crate::fixture::fixtureerror::FixtureError;
use crate::fixture::testcase::FixedSegment;
use crate::math::curve::nonparametriccurve::segmentlocator::locate_segment;
use crate::math::fixedpoint::fixedpoint::FixedPoint;

/// A contiguous run of fixed-point segments, as loaded back from a bulk table.
pub struct SegmentTable {
    segments: Vec<FixedSegment>,
    knots: Vec<FixedPoint>,
}

impl SegmentTable {
    pub fn new(segments: Vec<FixedSegment>) -> Result<SegmentTable, FixtureError> {
        let last = segments.last().ok_or(FixtureError::EmptyTable)?;
        if let Some(index) = segments.iter().position(|s| s.x_start() >= s.x_end()) {
            return Err(FixtureError::EmptySegment { index });
        }
        if let Some(i) = segments.windows(2).position(|pair| pair[0].x_end() != pair[1].x_start()) {
            return Err(FixtureError::NonContiguousTable { index: i + 1 });
        }

        let mut knots: Vec<FixedPoint> = segments.iter().map(|s| s.x_start().clone()).collect();
        knots.push(last.x_end().clone());
        Ok(SegmentTable { segments, knots })
    }

    pub fn segments(&self) -> &[FixedSegment] {
        &self.segments
    }

    pub fn min_x(&self) -> &FixedPoint {
        &self.knots[0]
    }

    pub fn max_x(&self) -> &FixedPoint {
        &self.knots[self.knots.len() - 1]
    }

    /// Segment index under the evaluator convention: left-closed intervals,
    /// the last one closed at both ends.
    pub fn locate(&self, x: &FixedPoint) -> usize {
        locate_segment(&self.knots, x)
    }

    /// Every segment whose closed interval contains `x`; an interior knot
    /// is reported by both of its neighbours.
    pub fn covering(&self, x: &FixedPoint) -> Vec<(usize, &FixedSegment)> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.contains(x))
            .collect()
    }
}

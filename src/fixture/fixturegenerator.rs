use log::{info, warn};

use crate::configuration::Configuration;
use crate::encoding::abiencoder::{
    TEST_CASE_COUNT,
    encode_test_vector
};
use crate::fixture::fixtureerror::FixtureError;
use crate::fixture::knotgenerator::KnotGenerator;
use crate::fixture::segmenttable::SegmentTable;
use crate::fixture::testcase::{
    FixedSegment,
    TestCase,
    fixed_segments
};
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::naturalcubicspline::NaturalCubicSpline;
use crate::math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
use crate::math::fixedpoint::fixedpoint::FixedPoint;

// ─────────────────────────────────────────────
// Random test vector
// ─────────────────────────────────────────────

pub struct RandomFixture {
    spline: NaturalCubicSpline,
    table: SegmentTable,
    test_cases: Vec<TestCase>,
}

impl RandomFixture {
    pub fn spline(&self) -> &NaturalCubicSpline {
        &self.spline
    }

    pub fn segments(&self) -> &[FixedSegment] {
        self.table.segments()
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// ABI encoding of `(spline_params, x_test, y_test, index_test)`.
    pub fn encode(&self) -> Result<Vec<u8>, FixtureError> {
        Ok(encode_test_vector(self.table.segments(), &self.test_cases)?)
    }
}

// ─────────────────────────────────────────────
// Bulk reference table
// ─────────────────────────────────────────────

pub struct BulkFixture {
    spline: NaturalCubicSpline,
    segments: Vec<FixedSegment>,
}

impl BulkFixture {
    pub fn segments(&self) -> &[FixedSegment] {
        &self.segments
    }

    /// Reference value at `x`, in floating and fixed point.
    pub fn example(&self, x: f64) -> Result<(f64, FixedPoint), FixtureError> {
        if x < self.spline.min_x() || x > self.spline.max_x() {
            warn!("example point {} lies outside the knot range, extrapolating", x);
        }
        let y = self.spline.value(x);
        Ok((y, FixedPoint::from_f64(y)?))
    }
}

// ─────────────────────────────────────────────
// FixtureGenerator
// ─────────────────────────────────────────────

pub struct FixtureGenerator<'a> {
    configuration: &'a Configuration,
}

impl<'a> FixtureGenerator<'a> {
    pub fn new(configuration: &'a Configuration) -> FixtureGenerator<'a> {
        FixtureGenerator { configuration }
    }

    /// Spline with a random segment count in `1..=max_segments` and
    /// `TEST_CASE_COUNT` queries drawn from its domain.
    pub fn generate_random(&self, seed: u64) -> Result<RandomFixture, FixtureError> {
        let mut generator = KnotGenerator::new(seed, self.configuration);
        let segment_count = generator.segment_count(self.configuration.max_segments);
        let spline = NaturalCubicSpline::new(generator.knots(segment_count)?)?;
        let table = SegmentTable::new(fixed_segments(&spline)?)?;

        let test_cases = generator
            .queries(spline.min_x(), spline.max_x(), TEST_CASE_COUNT)
            .into_iter()
            .map(|x| TestCase::evaluate(&spline, &table, x))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "seed {}: {} segments, {} test cases",
            seed,
            table.segments().len(),
            test_cases.len()
        );
        Ok(RandomFixture { spline, table, test_cases })
    }

    /// Spline with the configured bulk segment count and seed.
    pub fn generate_bulk(&self) -> Result<BulkFixture, FixtureError> {
        let mut generator = KnotGenerator::new(self.configuration.bulk_seed, self.configuration);
        let spline = NaturalCubicSpline::new(generator.knots(self.configuration.bulk_segments)?)?;
        let segments = fixed_segments(&spline)?;

        info!(
            "bulk seed {}: {} segments on [{}, {}]",
            self.configuration.bulk_seed,
            segments.len(),
            spline.min_x(),
            spline.max_x()
        );
        Ok(BulkFixture { spline, segments })
    }
}

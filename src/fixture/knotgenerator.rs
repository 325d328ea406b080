use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::configuration::Configuration;
use crate::fixture::fixtureerror::FixtureError;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;

/// Seeded source of knots and query points.
///
/// ChaCha8 keeps the stream stable across `rand` releases, so a seed always
/// reproduces the same fixture.
pub struct KnotGenerator {
    rng: ChaCha8Rng,
    lower: f64,
    upper: f64,
    max_redraws: usize,
}

impl KnotGenerator {
    pub fn new(seed: u64, configuration: &Configuration) -> KnotGenerator {
        let [lower, upper] = configuration.coordinate_range;
        KnotGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
            lower,
            upper,
            max_redraws: configuration.max_redraws,
        }
    }

    pub fn segment_count(&mut self, max_segments: usize) -> usize {
        self.rng.gen_range(1..=max_segments.max(1))
    }

    /// `segment_count + 1` knots with sorted, pairwise distinct x.
    ///
    /// All x are drawn first, then all y, and x is sorted afterwards; a draw
    /// with a repeated x is discarded as a whole.
    pub fn knots(&mut self, segment_count: usize) -> Result<Vec<Point2D>, FixtureError> {
        let knot_count = segment_count + 1;
        for attempt in 0..=self.max_redraws {
            let mut xs = self.uniform(knot_count);
            let ys = self.uniform(knot_count);
            xs.sort_by(f64::total_cmp);

            if xs.windows(2).all(|pair| pair[0] < pair[1]) {
                debug!("drew {} knots on attempt {}", knot_count, attempt + 1);
                return Ok(xs.into_iter().zip(ys).map(|(x, y)| Point2D::new(x, y)).collect());
            }
            warn!("knot draw {} repeated an x-value, redrawing", attempt + 1);
        }
        Err(FixtureError::DegenerateKnots { attempts: self.max_redraws + 1 })
    }

    /// `count` query points uniform in `[min_x, max_x)`.
    pub fn queries(&mut self, min_x: f64, max_x: f64, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.rng.gen_range(min_x..max_x)).collect()
    }

    fn uniform(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.rng.gen_range(self.lower..self.upper)).collect()
    }
}

/// Index of the segment covering `x` over sorted knot abscissas.
///
/// Segment `i` is `[knots[i], knots[i + 1])`, except the last one which also
/// contains its right end. The smallest `j` with `x < knots[j]` is found and
/// `j - 1` returned; when no such knot exists the last segment is returned.
/// Queries outside the knot range are clamped to the first or last segment.
///
/// Works for any ordered key, so the same convention applies to `f64` knots
/// and fixed-point bounds.
pub fn locate_segment<T: PartialOrd>(knots: &[T], x: &T) -> usize {
    let last_segment = knots.len().saturating_sub(2);
    let j = knots.partition_point(|knot| knot <= x);
    j.saturating_sub(1).min(last_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_knot_belongs_to_the_segment_it_starts() {
        let knots = [-1.0, 0.0, 1.0, 2.5];
        assert_eq!(locate_segment(&knots, &-1.0), 0);
        assert_eq!(locate_segment(&knots, &0.0), 1);
        assert_eq!(locate_segment(&knots, &1.0), 2);
    }

    #[test]
    fn right_end_belongs_to_the_last_segment() {
        let knots = [-1.0, 0.0, 1.0, 2.5];
        assert_eq!(locate_segment(&knots, &2.5), 2);
    }

    #[test]
    fn points_inside_segments() {
        let knots = [-1.0, 0.0, 1.0];
        assert_eq!(locate_segment(&knots, &-0.5), 0);
        assert_eq!(locate_segment(&knots, &0.5), 1);
        assert_eq!(locate_segment(&knots, &0.999999), 1);
    }

    #[test]
    fn single_segment() {
        let knots = [3.0, 4.0];
        assert_eq!(locate_segment(&knots, &3.0), 0);
        assert_eq!(locate_segment(&knots, &3.7), 0);
        assert_eq!(locate_segment(&knots, &4.0), 0);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let knots = [0, 10, 20];
        assert_eq!(locate_segment(&knots, &-5), 0);
        assert_eq!(locate_segment(&knots, &25), 1);
    }
}

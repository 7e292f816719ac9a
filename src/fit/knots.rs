//! Knot placement.
//!
//! Two strategies:
//!
//! - interpolation (`s = 0`): one interior knot per data point, leaving out the
//!   points next to the boundaries so the system is square
//! - adaptive refinement (`s > 0`): repeatedly split the knot interval that
//!   carries the largest share of the residual, at a data point in its middle
//!
//! Knots are always placed *strictly* inside their interval, so the interior
//! knot sequence stays strictly increasing even when x has ties.

use crate::math::find_span;

/// Interior knots of the interpolating spline of degree `k` through `x`.
///
/// Odd degrees put knots at data points, even degrees at midpoints between
/// neighbouring data points.
pub fn interpolation_knots(x: &[f64], degree: usize) -> Vec<f64> {
    let m = x.len();
    let count = m.saturating_sub(degree + 1);
    let first = degree / 2 + 1;
    (0..count)
        .map(|i| {
            let j = first + i;
            if degree % 2 == 1 {
                x[j]
            } else {
                0.5 * (x[j] + x[j - 1])
            }
        })
        .collect()
}

/// One knot interval during refinement.
#[derive(Debug, Clone)]
struct KnotInterval {
    /// Share of the weighted residual sum of squares.
    fp: f64,
    /// Indices of data points strictly inside the interval.
    points: Vec<usize>,
}

/// Split each interval's residual share off the current least squares fit.
///
/// A point sitting exactly on an interior knot contributes half of its squared
/// residual to each neighbour.
fn knot_intervals(x: &[f64], knots: &[f64], degree: usize, residual_sq: &[f64]) -> Vec<KnotInterval> {
    let k = degree;
    let count = knots.len() - 2 * k - 1;
    let mut intervals = vec![
        KnotInterval {
            fp: 0.0,
            points: Vec::new(),
        };
        count
    ];

    for (i, (&xi, &r2)) in x.iter().zip(residual_sq).enumerate() {
        let span = find_span(knots, k, xi);
        let j = span - k;
        if j > 0 && xi == knots[span] {
            intervals[j - 1].fp += 0.5 * r2;
            intervals[j].fp += 0.5 * r2;
            continue;
        }
        intervals[j].fp += r2;
        if knots[span] < xi && xi < knots[span + 1] {
            intervals[j].points.push(i);
        }
    }
    intervals
}

/// Add up to `count` knots to `interior`.
///
/// `knots` is the full knot vector the residuals were computed with and
/// `max_knots` caps the full knot count. Returns the number of knots added;
/// zero means no interval holds a data point it could be split at.
pub fn add_knots(
    x: &[f64],
    knots: &[f64],
    degree: usize,
    residual_sq: &[f64],
    interior: &mut Vec<f64>,
    count: usize,
    max_knots: usize,
) -> usize {
    let mut intervals = knot_intervals(x, knots, degree, residual_sq);
    let mut added = 0;

    for _ in 0..count {
        if interior.len() + 2 * (degree + 1) >= max_knots {
            break;
        }

        // First interval with the strictly largest residual share among the
        // ones that can still be split.
        let mut best: Option<usize> = None;
        for (j, iv) in intervals.iter().enumerate() {
            if iv.points.is_empty() {
                continue;
            }
            match best {
                Some(b) if intervals[b].fp >= iv.fp => {}
                _ => best = Some(j),
            }
        }
        let Some(j) = best else {
            break;
        };

        let split = intervals.remove(j);
        let total = split.points.len() as f64;
        let knot = x[split.points[split.points.len() / 2]];

        let (left, right): (Vec<usize>, Vec<usize>) = split
            .points
            .iter()
            .copied()
            .filter(|&i| x[i] != knot)
            .partition(|&i| x[i] < knot);

        let right_iv = KnotInterval {
            fp: split.fp * right.len() as f64 / total,
            points: right,
        };
        let left_iv = KnotInterval {
            fp: split.fp * left.len() as f64 / total,
            points: left,
        };
        intervals.insert(j, right_iv);
        intervals.insert(j, left_iv);

        let pos = interior.partition_point(|&t| t < knot);
        interior.insert(pos, knot);
        added += 1;
    }

    added
}

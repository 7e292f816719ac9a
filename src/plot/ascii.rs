//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - digitized samples: `o`
//! - fitted spline: `-` line

use crate::domain::Sample;
use crate::error::SplineError;
use crate::models::SplineCurve;

/// Render samples and the spline through them.
///
/// The x range is that of the samples (the curve bounds when there are none).
pub fn render_ascii_plot(
    samples: &[Sample],
    curve: &SplineCurve,
    width: usize,
    height: usize,
) -> Result<String, SplineError> {
    let (x_min, x_max) = energy_range(samples).unwrap_or(curve.bounds());
    let points = sample_curve(curve, x_min, x_max, width.max(2))?;
    Ok(render_plot(samples, &points, x_min, x_max, width, height))
}

fn render_plot(
    samples: &[Sample],
    curve_points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(samples, curve_points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    draw_curve(&mut grid, curve_points, x_min, x_max, y_min, y_max);

    for s in samples {
        let x = map_x(s.energy_kev, x_min, x_max, width);
        let y = map_y(s.absorption, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: energy=[{x_min:.4}, {x_max:.4}] keV | absorption=[{y_min:.3}, {y_max:.3}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn energy_range(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for s in samples {
        min_x = min_x.min(s.energy_kev);
        max_x = max_x.max(s.energy_kev);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn sample_curve(curve: &SplineCurve, x_min: f64, x_max: f64, n: usize) -> Result<Vec<(f64, f64)>, SplineError> {
    let n = n.max(2);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        out.push((x, curve.eval(x)?));
    }
    Ok(out)
}

fn y_range(samples: &[Sample], curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for s in samples {
        min_y = min_y.min(s.absorption);
        max_y = max_y.max(s.absorption);
    }
    for &(_, y) in curve {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Extrapolation;
    use crate::math::BSpline;

    fn flat(level: f64, lo: f64, hi: f64) -> SplineCurve {
        let spline = BSpline::new(vec![lo, lo, hi, hi], vec![level, level], 1);
        SplineCurve::new(spline, (lo, hi), Extrapolation::Extrapolate)
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let samples = [Sample::new(1.0, 0.1), Sample::new(10.0, 0.2)];
        let txt = render_ascii_plot(&samples, &flat(0.1, 1.0, 10.0), 10, 5).unwrap();
        let expected = concat!(
            "Plot: energy=[1.0000, 10.0000] keV | absorption=[0.095, 0.205]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn curve_evaluation_errors_propagate() {
        let samples = [Sample::new(0.0, 0.1), Sample::new(20.0, 0.2)];
        let curve = flat(0.1, 1.0, 10.0).with_extrapolation(Extrapolation::Raise);
        assert!(render_ascii_plot(&samples, &curve, 20, 8).is_err());
    }

    #[test]
    fn plot_has_requested_shape() {
        let samples = [Sample::new(7.1, 0.0), Sample::new(7.15, 1.3)];
        let txt = render_ascii_plot(&samples, &flat(0.5, 7.1, 7.15), 40, 12).unwrap();
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
        let marks: usize = lines[1..].iter().map(|l| l.matches('o').count()).sum();
        assert_eq!(marks, 2);
    }
}

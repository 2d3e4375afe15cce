//! ASCII plotting of a single-date yield curve for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - quoted tenors: `o`
//! - linear interpolation between them: `-`

use crate::domain::Tenor;

/// Render the curve (decimal yields) against tenor in years.
pub fn render_curve_plot(curve: &[(Tenor, f64)], width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = curve.iter().map(|&(t, y)| (t.years(), y)).collect();
    let (t_min, t_max) = tenor_range(&points).unwrap_or((0.0, 30.0));
    render_plot(&points, t_min, t_max, width, height)
}

fn render_plot(points: &[(f64, f64)], t_min: f64, t_max: f64, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(points).unwrap_or((0.0, 0.05));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the line first so quoted points overlay it.
    draw_curve(&mut grid, points, t_min, t_max, y_min, y_max);

    for &(t, y) in points {
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        grid[yy][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: tenor=[{t_min:.3}, {t_max:.3}] years | y=[{:.2}, {:.2}]%\n",
        y_min * 100.0,
        y_max * 100.0
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn tenor_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;
    for &(t, _) in points {
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }
    if min_t.is_finite() && max_t.is_finite() && max_t > min_t {
        Some((min_t, max_t))
    } else {
        None
    }
}

fn y_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in points {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else if min_y.is_finite() {
        // Flat curve: give it some room.
        Some((min_y - 0.001, max_y + 0.001))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], points: &[(f64, f64)], t_min: f64, t_max: f64, y_min: f64, y_max: f64) {
    if points.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, y) in points {
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        }
        prev = Some((x, yy));
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

    #[test]
    fn plot_golden_snapshot_flat() {
        let curve = [(Tenor::Y1, 0.02), (Tenor::Y10, 0.02)];

        let txt = render_curve_plot(&curve, 10, 5);
        let expected = concat!(
            "Plot: tenor=[1.000, 10.000] years | y=[1.89, 2.11]%\n",
            "          \n",
            "          \n",
            "o--------o\n",
            "          \n",
            "          \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn upward_sloping_curve_spans_corners() {
        let curve = [(Tenor::Y1, 0.01), (Tenor::Y10, 0.03)];

        let txt = render_curve_plot(&curve, 10, 5);
        let rows: Vec<Vec<char>> = txt.lines().skip(1).map(|l| l.chars().collect()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4][0], 'o');
        assert_eq!(rows[0][9], 'o');
        assert!(rows.iter().flatten().filter(|&&c| c == '-').count() > 0);
    }

    #[test]
    fn empty_curve_renders_blank_grid() {
        let txt = render_curve_plot(&[], 10, 5);
        assert_eq!(txt.lines().count(), 6);
        assert!(txt.lines().skip(1).all(|l| l.trim().is_empty()));
    }
}

//! Two-line ASCII growth chart for terminal output.
//!
//! Fixed-size grid, deterministic output:
//! - nominal balance: `*`
//! - inflation-adjusted balance: `+`

use crate::core::ProjectionPoint;
use crate::locale::{LabelKey, Locale, format_currency, label};

const NOMINAL_MARK: char = '*';
const ADJUSTED_MARK: char = '+';

pub const MIN_CHART_WIDTH: usize = 10;
pub const MAX_CHART_WIDTH: usize = 400;
pub const MIN_CHART_HEIGHT: usize = 5;
pub const MAX_CHART_HEIGHT: usize = 200;

/// Render the projection series as a fixed-size character grid with a header and legend.
///
/// Sizes outside the supported range are clamped.
pub fn render_chart(series: &[ProjectionPoint], locale: Locale, width: usize, height: usize) -> String {
    let width = width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH);
    let height = height.clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT);

    let first_year = series.first().map_or(0, |p| p.year_index);
    let last_year = series.last().map_or(0, |p| p.year_index);
    let x_min = f64::from(first_year);
    let x_max = if last_year > first_year {
        f64::from(last_year)
    } else {
        x_min + 1.0
    };

    let (v_min, v_max) = value_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(v_min, v_max, 0.05);

    let nominal: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (f64::from(p.year_index), p.nominal_value))
        .collect();
    let adjusted: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (f64::from(p.year_index), p.inflation_adjusted_value))
        .collect();

    let mut grid = vec![vec![' '; width]; height];
    // Nominal first so it wins where the two lines overlap.
    draw_polyline(&mut grid, &nominal, NOMINAL_MARK, (x_min, x_max), (y_min, y_max));
    draw_polyline(&mut grid, &adjusted, ADJUSTED_MARK, (x_min, x_max), (y_min, y_max));

    let mut out = String::new();
    out.push_str(&format!(
        "{}: {first_year}-{last_year} | {} - {}\n",
        label(locale, LabelKey::Year),
        format_currency(locale, v_min),
        format_currency(locale, v_max),
    ));
    out.push_str(&format!(
        "{NOMINAL_MARK} {}   {ADJUSTED_MARK} {}\n",
        label(locale, LabelKey::FutureValue),
        label(locale, LabelKey::InflationAdjustedValue),
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn value_range(series: &[ProjectionPoint]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for p in series {
        for v in [p.nominal_value, p.inflation_adjusted_value] {
            if v.is_finite() {
                min_v = min_v.min(v);
                max_v = max_v.max(v);
            }
        }
    }
    if min_v.is_finite() && max_v.is_finite() {
        Some((min_v, max_v))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = if span > 0.0 {
        span * frac
    } else {
        (max.abs() * frac).max(1.0)
    };
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Largest value on row 0.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    mark: char,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return;
    }

    let mut prev = None;
    for &(x, y) in points {
        if !y.is_finite() {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, mark),
            None => plot(grid, col, row, mark),
        }
        prev = Some((col, row));
    }
}

fn plot(grid: &mut [Vec<char>], col: usize, row: usize, mark: char) {
    if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
        if *cell == ' ' {
            *cell = mark;
        }
    }
}

/// Integer line drawing (Bresenham).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, mark: char) {
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
        if x0 >= 0 && y0 >= 0 {
            plot(grid, x0 as usize, y0 as usize, mark);
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
    use crate::core::{CompoundingFrequency, ProjectionInput, project};

    fn sample_series() -> Vec<ProjectionPoint> {
        project(&ProjectionInput {
            initial_investment: 10_000.0,
            annual_return_percent: 7.0,
            years: 10,
            compounding_frequency: CompoundingFrequency::Annually,
            monthly_contribution: 100.0,
            inflation_rate_percent: 2.0,
        })
        .series
    }

    #[test]
    fn chart_has_header_legend_and_fixed_grid() {
        let chart = render_chart(&sample_series(), Locale::English, 20, 8);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2 + 8);
        assert!(lines[0].starts_with("Year: 0-10 | $10,000.00 - "));
        assert_eq!(lines[1], "* Future Value   + Inflation-Adjusted Value");
        for row in &lines[2..] {
            assert_eq!(row.chars().count(), 20);
        }
    }

    #[test]
    fn nominal_line_ends_top_right_and_starts_bottom_left() {
        let chart = render_chart(&sample_series(), Locale::English, 20, 8);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[2].chars().last(), Some(NOMINAL_MARK));
        assert_eq!(lines[9].chars().next(), Some(NOMINAL_MARK));
        assert!(chart.contains(ADJUSTED_MARK));
    }

    #[test]
    fn single_point_and_flat_series_render_without_panicking() {
        let single = [ProjectionPoint {
            year_index: 0,
            nominal_value: 500.0,
            inflation_adjusted_value: 500.0,
        }];
        let chart = render_chart(&single, Locale::Norwegian, 4, 2);
        assert_eq!(chart.lines().count(), 2 + 5);
        assert!(chart.starts_with("År: 0-0 | "));
        assert!(chart.contains(NOMINAL_MARK));

        let flat: Vec<ProjectionPoint> = (0..5)
            .map(|year_index| ProjectionPoint {
                year_index,
                nominal_value: 0.0,
                inflation_adjusted_value: 0.0,
            })
            .collect();
        let chart = render_chart(&flat, Locale::English, 12, 6);
        assert!(chart.lines().skip(2).any(|row| row.trim() == "*".repeat(12)));
    }

    #[test]
    fn oversized_dimensions_are_clamped() {
        let chart = render_chart(&sample_series(), Locale::English, usize::MAX, usize::MAX);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2 + MAX_CHART_HEIGHT);
        for row in &lines[2..] {
            assert_eq!(row.chars().count(), MAX_CHART_WIDTH);
        }
    }

    #[test]
    fn empty_series_renders_blank_grid() {
        let chart = render_chart(&[], Locale::English, 10, 5);
        assert_eq!(chart.lines().count(), 7);
        assert!(chart.lines().skip(2).all(|row| row.trim().is_empty()));
    }
}

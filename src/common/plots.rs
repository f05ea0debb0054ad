//! Plotting infrastructure for rank-frequency charts
//!
//! This module renders observed frequencies and the theoretical Zipf curve on
//! log-log axes using the [`plotters`] crate. Charts are saved as PNG files with
//! a fixed 1000x600 resolution.

use crate::analysis::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use crate::common::{RankedTable, ZipfCurve};
use log::debug;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Multiplicative margin around the data on each logarithmic axis
const LOG_PADDING: f64 = 1.25;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Formats the Zipf constant the way it appears in the legend.
///
/// Whole numbers are printed without a fractional part (`10`, not `10.0`).
pub fn format_constant(constant: f64) -> String {
    if constant.fract() == 0.0 && constant.abs() < 1e15 {
        format!("{:.0}", constant)
    } else {
        format!("{}", constant)
    }
}

/// Legend label for the theoretical curve
pub fn zipf_label(constant: f64) -> String {
    format!("Zipf's law (f ~ {} / r)", format_constant(constant))
}

/// Creates the rank-frequency chart and saves it as an image
///
/// Observed frequencies are drawn as small semi-transparent markers and the
/// theoretical curve as a red dashed line, both on logarithmic (base 10) axes.
///
/// # Arguments
/// * `ranked` - Observed frequencies in rank order
/// * `curve` - Theoretical frequencies for the same ranks
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If validation or drawing failed
///
/// # Output Safety
/// The chart is rendered into a sibling `*.partial.*` file and only renamed onto
/// `output_path` once it has been fully written. On failure the partial file is
/// removed and `output_path` is left untouched.
pub fn create_zipf_plot(ranked: &RankedTable, curve: &ZipfCurve, output_path: &Path) -> Result<()> {
    if ranked.is_empty() {
        return Err(PlotError::InvalidData(
            "Ranked table cannot be empty".to_string(),
        ));
    }

    if ranked.len() != curve.len() {
        return Err(PlotError::InvalidData(format!(
            "Series lengths differ: {} observed, {} theoretical",
            ranked.len(),
            curve.len()
        )));
    }

    let observed = log_points(&ranked.frequencies());
    let theoretical = log_points(&curve.values);
    if theoretical.is_empty() {
        return Err(PlotError::InvalidData(
            "Theoretical curve has no positive values".to_string(),
        ));
    }

    let skipped = ranked.len() - observed.len();
    if skipped > 0 {
        debug!("Skipping {} zero-frequency ranks on log axes", skipped);
    }

    let partial = partial_path(output_path);
    let result = draw_zipf_chart(&observed, &theoretical, curve.constant, &partial)
        .and_then(|()| fs::rename(&partial, output_path).map_err(PlotError::from));

    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }

    result
}

/// Renders both series into `output_path`.
///
/// All plotters state is dropped before this returns, so the backend has
/// flushed (or abandoned) the file by the time the caller inspects it.
fn draw_zipf_chart(
    observed: &[(f64, f64)],
    theoretical: &[(f64, f64)],
    constant: f64,
    output_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let points = || observed.iter().chain(theoretical.iter());
    let x_max = points().map(|(x, _)| *x).fold(1.0, f64::max);
    let y_min = points().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = points().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption("Term Distribution (Log-Log Scale)", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            log_axis_range(1.0, x_max).log_scale(),
            log_axis_range(y_min, y_max).log_scale(),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Rank (log)")
        .y_desc("Frequency (log)")
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 16))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.2))
        .x_label_formatter(&format_tick)
        .y_label_formatter(&format_tick)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(
            observed
                .iter()
                .map(|&point| Circle::new(point, 2, BLUE.mix(0.6).filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Observed frequencies")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart_context
        .draw_series(DashedLineSeries::new(
            theoretical.iter().copied(),
            10,
            6,
            RED.stroke_width(2),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(zipf_label(constant))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 18))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Pairs each value with its rank, dropping values a log axis cannot place.
fn log_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| ((index + 1) as f64, value))
        .filter(|&(_, value)| value > 0.0)
        .collect()
}

/// Pads a positive `[min, max]` interval multiplicatively.
fn log_axis_range(min: f64, max: f64) -> Range<f64> {
    (min / LOG_PADDING)..(max * LOG_PADDING)
}

fn format_tick(value: &f64) -> String {
    if *value >= 1.0 {
        format!("{:.0}", value.round())
    } else {
        format!("{:.2}", value)
    }
}

/// `plot.png` -> `plot.partial.png`, keeping the extension so the bitmap
/// backend still picks the right encoder.
fn partial_path(output_path: &Path) -> PathBuf {
    let stem = output_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = output_path
        .extension()
        .map_or_else(|| "png".to_string(), |ext| ext.to_string_lossy().into_owned());

    output_path.with_file_name(format!("{}.partial.{}", stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{rank_by_frequency, zipf_curve};
    use crate::common::{FrequencyRow, FrequencyTable};
    use rstest::rstest;

    fn ranked(frequencies: &[f64]) -> RankedTable {
        rank_by_frequency(FrequencyTable::new(
            frequencies
                .iter()
                .enumerate()
                .map(|(index, &frequency)| FrequencyRow::new(format!("t{}", index), frequency))
                .collect(),
        ))
    }

    #[rstest]
    #[case(10.0, "10")]
    #[case(12345.0, "12345")]
    #[case(2.5, "2.5")]
    #[case(0.125, "0.125")]
    fn test_format_constant(#[case] constant: f64, #[case] expected: &str) {
        assert_eq!(format_constant(constant), expected);
    }

    #[test]
    fn test_zipf_label() {
        assert_eq!(zipf_label(10.0), "Zipf's law (f ~ 10 / r)");
    }

    #[test]
    fn test_log_points_skips_non_positive_values() {
        let points = log_points(&[8.0, 4.0, 0.0, 0.0]);
        assert_eq!(points, vec![(1.0, 8.0), (2.0, 4.0)]);
    }

    #[test]
    fn test_log_axis_range_is_never_degenerate() {
        let range = log_axis_range(5.0, 5.0);
        assert!(range.start < 5.0);
        assert!(range.end > 5.0);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(&1000.0), "1000");
        assert_eq!(format_tick(&9.9999), "10");
        assert_eq!(format_tick(&0.5), "0.50");
    }

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("zipf_distribution.png")),
            PathBuf::from("zipf_distribution.partial.png")
        );
        assert_eq!(
            partial_path(Path::new("out/plot.jpg")),
            PathBuf::from("out/plot.partial.jpg")
        );
        assert_eq!(
            partial_path(Path::new("out/plot")),
            PathBuf::from("out/plot.partial.png")
        );
    }

    #[test]
    fn test_create_zipf_plot_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("zipf_distribution.png");

        // Empty data
        let empty = ranked(&[]);
        let curve = ZipfCurve {
            constant: 1.0,
            values: vec![],
        };
        let result = create_zipf_plot(&empty, &curve, &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Mismatched lengths
        let table = ranked(&[10.0, 5.0]);
        let short_curve = ZipfCurve {
            constant: 10.0,
            values: vec![10.0],
        };
        let result = create_zipf_plot(&table, &short_curve, &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Nothing may be written when validation fails
        assert!(!output_path.exists());
        assert!(!partial_path(&output_path).exists());
    }

    #[test]
    fn test_create_zipf_plot_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("zipf_distribution.png");

        let table = ranked(&[120.0, 60.0, 41.0, 30.0, 22.0, 20.0, 0.0]);
        let curve = zipf_curve(&table).unwrap();
        let result = create_zipf_plot(&table, &curve, &output_path);

        assert!(result.is_ok());
        assert!(output_path.exists());
        assert!(!partial_path(&output_path).exists());
    }
}

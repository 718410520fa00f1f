//! Two-panel diagnostic chart for CARM extraction
//!
//! Renders the memory-bandwidth and arithmetic-performance curves side
//! by side on log-log axes, with the detected cache-level clusters and
//! reference lines overlaid. Intended as a visual sanity check of the
//! clustering: every plateau of the measured curve should carry exactly
//! one reference line, and the highlighted cluster points should sit on
//! the flat part of their plateau.
//!
//! # Example
//!
//! ```rust,ignore
//! use carm_rs::analysis::bandwidth_clusters;
//! use carm_rs::model::build_model;
//! use carm_rs::output::visualization::plot_roofline_diagnostics;
//!
//! let model = build_model(&benchmark, frequency_hz)?;
//! let clusters = bandwidth_clusters(&benchmark.memory, frequency_hz)?;
//!
//! plot_roofline_diagnostics(&benchmark, &clusters, &model, "carm.png", None)?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;
use std::ops::Range;

use crate::analysis::Cluster;
use crate::model::CarmModel;
use crate::output::visualization::config::PlotConfig;
use crate::output::visualization::format::{with_base10_prefix, with_base2_prefix};
use crate::sweep::{BenchmarkData, Sweep};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Log-log axis range with a factor-of-two pad on both ends.
///
/// The pad keeps a single-point sweep from producing a degenerate range.
fn padded_log_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min / 2.0)..(max * 2.0)
}

/// `(size, rate)` series of a sweep as plot coordinates.
fn sweep_series(sweep: &Sweep, frequency_hz: u64) -> Vec<(f64, f64)> {
    sweep
        .points()
        .iter()
        .map(|p| (p.size as f64, p.rate(frequency_hz)))
        .collect()
}

// =================================================================================================
// Panel Drawing
// =================================================================================================

/// Memory panel: bandwidth curve, cluster overlay, one reference line
/// per detected level.
fn draw_bandwidth_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    memory: &Sweep,
    clusters: &[Cluster],
    bandwidths: &[f64],
    frequency_hz: u64,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let series = sweep_series(memory, frequency_hz);

    let x_range = padded_log_range(series.iter().map(|(x, _)| *x));
    let y_range = padded_log_range(
        series
            .iter()
            .map(|(_, y)| *y)
            .chain(bandwidths.iter().copied()),
    );
    let x_lo = x_range.start;
    let x_hi = x_range.end;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.log_scale().base(2.0), y_range.log_scale())?;

    // Named formatters: the mesh keeps borrows of them until draw().
    let x_formatter = |x: &f64| with_base2_prefix(*x, 0);
    let y_formatter = |y: &f64| with_base10_prefix(*y, 1);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc("Data Traffic [Bytes]")
        .y_desc("Memory Bandwidth [B/s]")
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Measured curve with point markers
    chart.draw_series(LineSeries::new(
        series.iter().copied(),
        config.curve_color.stroke_width(config.line_width),
    ))?;
    chart.draw_series(
        series
            .iter()
            .map(|(x, y)| Cross::new((*x, *y), 4, config.curve_color.filled())),
    )?;

    // Detected levels: surviving cluster points, dotted reference line,
    // bandwidth annotation
    let annotation_font = ("sans-serif", 16)
        .into_font()
        .color(&config.reference_color);

    for (cluster, &bandwidth) in clusters.iter().zip(bandwidths.iter()) {
        chart.draw_series(cluster.points().iter().map(|(size, rate)| {
            Circle::new((*size as f64, *rate), 4, config.cluster_color.filled())
        }))?;

        chart.draw_series(DashedLineSeries::new(
            [(x_lo, bandwidth), (x_hi, bandwidth)],
            4,
            4,
            config.reference_color.stroke_width(1),
        ))?;

        chart.draw_series(std::iter::once(Text::new(
            with_base10_prefix(bandwidth, 3),
            (x_lo * 1.2, bandwidth * 1.25),
            annotation_font.clone(),
        )))?;
    }

    Ok(())
}

/// Arithmetic panel: performance curve and the peak reference line.
fn draw_performance_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    arithmetic: &Sweep,
    peak_performance: f64,
    frequency_hz: u64,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let series = sweep_series(arithmetic, frequency_hz);

    let x_range = padded_log_range(series.iter().map(|(x, _)| *x));
    let y_range = padded_log_range(
        series
            .iter()
            .map(|(_, y)| *y)
            .chain(std::iter::once(peak_performance)),
    );
    let x_lo = x_range.start;
    let x_hi = x_range.end;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.log_scale().base(2.0), y_range.log_scale())?;

    let x_formatter = |x: &f64| with_base2_prefix(*x, 0);
    let y_formatter = |y: &f64| with_base10_prefix(*y, 1);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc("Arithmetic Operations [Ops]")
        .y_desc("Arithmetic Performance [Ops/s]")
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    chart.draw_series(LineSeries::new(
        series.iter().copied(),
        config.curve_color.stroke_width(config.line_width),
    ))?;
    chart.draw_series(
        series
            .iter()
            .map(|(x, y)| Cross::new((*x, *y), 4, config.curve_color.filled())),
    )?;

    chart.draw_series(DashedLineSeries::new(
        [(x_lo, peak_performance), (x_hi, peak_performance)],
        4,
        4,
        config.reference_color.stroke_width(1),
    ))?;

    chart.draw_series(std::iter::once(Text::new(
        with_base10_prefix(peak_performance, 3),
        (x_lo * 1.2, peak_performance * 1.25),
        ("sans-serif", 16)
            .into_font()
            .color(&config.reference_color),
    )))?;

    Ok(())
}

/// Draw both panels on any drawing area.
fn draw_diagnostics<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    benchmark: &BenchmarkData,
    clusters: &[Cluster],
    model: &CarmModel,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let panels = root.split_evenly((1, 2));
    draw_bandwidth_panel(
        &panels[0],
        &benchmark.memory,
        clusters,
        &model.bandwidths,
        model.frequency_hz,
        config,
    )?;
    draw_performance_panel(
        &panels[1],
        &benchmark.arithmetic,
        model.peak_performance,
        model.frequency_hz,
        config,
    )?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Main Plotting Function
// =================================================================================================

/// Render the two-panel extraction diagnostic to `output_path`.
///
/// `clusters` comes from
/// [`bandwidth_clusters`](crate::analysis::bandwidth_clusters) over the
/// same sweep and frequency the model was built from. The backend is
/// chosen by extension: `.svg` for vector output, bitmap PNG otherwise.
///
/// # Errors
///
/// Returns an error when the file cannot be written or drawing fails.
///
/// # Panics
///
/// Panics when either sweep is empty; build the model first, which
/// rejects empty sweeps.
pub fn plot_roofline_diagnostics(
    benchmark: &BenchmarkData,
    clusters: &[Cluster],
    model: &CarmModel,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    assert!(
        !benchmark.memory.is_empty() && !benchmark.arithmetic.is_empty(),
        "diagnostic chart requires non-empty sweeps"
    );

    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_diagnostics(&root, benchmark, clusters, model, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_diagnostics(&root, benchmark, clusters, model, config)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! CARM result record and model assembly
//!
//! [`build_model`] is the aggregation step on top of the two extractors:
//! it runs them over the benchmark record and wraps their outputs,
//! together with the clock frequency, into a [`CarmModel`]. The
//! assembly is pure; persistence and charting live in
//! [`output`](crate::output) and are composed by the caller.

use serde::{Deserialize, Serialize};

use crate::analysis::{extract_bandwidth, extract_peak_performance};
use crate::error::Result;
use crate::sweep::BenchmarkData;

/// Cache-aware roofline model of one processor core.
///
/// The durable output artifact of a run. Constructed once and never
/// mutated; serializes to the fixed-field JSON record
///
/// ```json
/// {
///     "bandwidths": [6.4e9, 1.6e8],
///     "peak_performance": 4.0e9,
///     "frequency_hz": 1000000000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarmModel {
    /// Memory bandwidth per detected cache level in B/s, L1 outward
    pub bandwidths: Vec<f64>,

    /// Peak arithmetic performance in Ops/s
    pub peak_performance: f64,

    /// Core clock frequency in Hz the sweeps were measured at
    pub frequency_hz: u64,
}

/// Build the CARM from benchmark results.
///
/// Runs bandwidth extraction over the memory sweep and peak-performance
/// extraction over the arithmetic sweep.
///
/// # Errors
///
/// Propagates [`CarmError::InvalidInput`](crate::CarmError::InvalidInput)
/// and [`CarmError::DegenerateCluster`](crate::CarmError::DegenerateCluster)
/// from the extractors.
///
/// # Example
///
/// ```
/// use carm_rs::model::build_model;
/// use carm_rs::sweep::{BenchmarkData, Sweep};
///
/// # fn main() -> Result<(), carm_rs::CarmError> {
/// let benchmark = BenchmarkData {
///     memory: Sweep::from_pairs([(64, 10), (128, 20), (256, 40)])?,
///     arithmetic: Sweep::from_pairs([(100, 50), (400, 100)])?,
/// };
///
/// let model = build_model(&benchmark, 1_000_000_000)?;
/// assert_eq!(model.bandwidths, vec![6.4e9]);
/// assert_eq!(model.peak_performance, 4.0e9);
/// # Ok(())
/// # }
/// ```
pub fn build_model(benchmark: &BenchmarkData, frequency_hz: u64) -> Result<CarmModel> {
    let bandwidths = extract_bandwidth(&benchmark.memory, frequency_hz)?;
    let peak_performance = extract_peak_performance(&benchmark.arithmetic, frequency_hz)?;

    Ok(CarmModel {
        bandwidths,
        peak_performance,
        frequency_hz,
    })
}

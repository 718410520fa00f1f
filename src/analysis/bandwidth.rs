//! Bandwidth extraction from the memory sweep
//!
//! The extractor runs four passes over the sweep, all linear:
//!
//! 1. **Rate curve**: `rate = frequency * size / cycles` per point, in
//!    input order. The scan is order-sensitive, so the sweep must be
//!    presented in ascending working-set order (validated, not assumed).
//! 2. **Clustering**: an online left-to-right scan. A point within
//!    [`CLUSTER_THRESHOLD`](super::CLUSTER_THRESHOLD) of the running
//!    cluster mean joins the cluster. A deviating point closes the
//!    cluster when it has at least
//!    [`MIN_CLUSTER_LEN`](super::MIN_CLUSTER_LEN) points, and otherwise
//!    replaces it: a short contradicted run is a transient, not a cache
//!    level. The trailing cluster is kept whatever its length, since no
//!    later point contradicted it.
//! 3. **Outlier trimming**: per cluster, repeatedly drop the point with
//!    the largest absolute deviation from the current mean, recomputing
//!    the mean after each removal. Roughly the most deviant half goes;
//!    at least one point is dropped, and at least one always survives.
//!    A single-point cluster is left untouched (the unguarded removal
//!    count formula would delete its only point).
//! 4. **Reduction**: the representative bandwidth of each cluster is the
//!    arithmetic mean of its surviving rates.
//!
//! The result is one bandwidth per detected cache level, ordered from L1
//! outward when the input follows ascending transfer sizes.

use crate::analysis::{CLUSTER_THRESHOLD, MIN_CLUSTER_LEN};
use crate::error::{CarmError, Result};
use crate::sweep::Sweep;

// =================================================================================================
// Cluster
// =================================================================================================

/// A contiguous run of `(size, rate)` points attributed to one cache
/// level.
///
/// Produced by [`bandwidth_clusters`] after outlier trimming; the
/// surviving points are what the representative bandwidth is averaged
/// over, and what the diagnostic chart highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    points: Vec<(u64, f64)>,
}

impl Cluster {
    fn new(points: Vec<(u64, f64)>) -> Self {
        Self { points }
    }

    /// Surviving `(size, rate)` points in sweep order.
    pub fn points(&self) -> &[(u64, f64)] {
        &self.points
    }

    /// Number of surviving points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check emptiness.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the surviving rates.
    ///
    /// Callers guard against empty clusters; see
    /// [`CarmError::DegenerateCluster`].
    fn mean_rate(&self) -> f64 {
        let sum: f64 = self.points.iter().map(|(_, rate)| rate).sum();
        sum / self.points.len() as f64
    }
}

// =================================================================================================
// Clustering pass
// =================================================================================================

fn mean(points: &[(u64, f64)]) -> f64 {
    let sum: f64 = points.iter().map(|(_, rate)| rate).sum();
    sum / points.len() as f64
}

/// Segment the rate curve into clusters, one per detected cache level.
fn scan_clusters(sweep: &Sweep, frequency_hz: u64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut current: Vec<(u64, f64)> = Vec::new();

    for point in sweep.points() {
        let rate = point.rate(frequency_hz);

        if current.is_empty() {
            current.push((point.size, rate));
            continue;
        }

        let cluster_avg = mean(&current);

        if (rate - cluster_avg).abs() < CLUSTER_THRESHOLD * cluster_avg {
            current.push((point.size, rate));
        } else if current.len() < MIN_CLUSTER_LEN {
            // Transient run, not a level: replace it with the new point.
            current.clear();
            current.push((point.size, rate));
        } else {
            clusters.push(Cluster::new(std::mem::take(&mut current)));
            current.push((point.size, rate));
        }
    }

    // The trailing cluster was never contradicted, keep it.
    if !current.is_empty() {
        clusters.push(Cluster::new(current));
    }

    clusters
}

// =================================================================================================
// Outlier trimming pass
// =================================================================================================

/// Drop the most deviant points of one cluster.
///
/// Removal count is `max(1, min(n / 2, n - 1))` for `n >= 2`: the top
/// half by deviation, at least one point, never all of them. A cluster
/// of one point is not trimmed.
fn trim_outliers(points: &mut Vec<(u64, f64)>) {
    if points.len() < 2 {
        return;
    }

    let to_remove = (points.len() / 2).clamp(1, points.len() - 1);

    for _ in 0..to_remove {
        let average = mean(points);

        let mut max_dev = f64::NEG_INFINITY;
        let mut max_idx = 0;
        for (idx, (_, rate)) in points.iter().enumerate() {
            let deviation = (rate - average).abs();
            if deviation > max_dev {
                max_dev = deviation;
                max_idx = idx;
            }
        }

        points.remove(max_idx);
    }
}

// =================================================================================================
// Public API
// =================================================================================================

/// Cluster the memory sweep into trimmed cache-level clusters.
///
/// This exposes the intermediate state of [`extract_bandwidth`] so the
/// diagnostic chart can highlight the clusters without re-deriving them.
///
/// # Errors
///
/// [`CarmError::InvalidInput`] when the sweep is empty or its sizes are
/// not strictly increasing.
pub fn bandwidth_clusters(sweep: &Sweep, frequency_hz: u64) -> Result<Vec<Cluster>> {
    if frequency_hz == 0 {
        return Err(CarmError::invalid_input("clock frequency must be positive"));
    }

    if sweep.is_empty() {
        return Err(CarmError::invalid_input("memory sweep is empty"));
    }

    if !sweep.is_strictly_ascending() {
        return Err(CarmError::invalid_input(
            "memory sweep sizes must be strictly increasing",
        ));
    }

    let mut clusters = scan_clusters(sweep, frequency_hz);

    for cluster in &mut clusters {
        trim_outliers(&mut cluster.points);
    }

    Ok(clusters)
}

/// Identify the memory bandwidth of each cache level from the memory
/// sweep.
///
/// Returns one bandwidth in B/s per detected level, in sweep order
/// (ascending cache level when the input follows ascending transfer
/// sizes).
///
/// # Errors
///
/// - [`CarmError::InvalidInput`] on an empty or non-ascending sweep.
/// - [`CarmError::DegenerateCluster`] if a cluster reaches the reduction
///   with no surviving points.
///
/// # Example
///
/// ```
/// use carm_rs::analysis::extract_bandwidth;
/// use carm_rs::sweep::Sweep;
///
/// # fn main() -> Result<(), carm_rs::CarmError> {
/// // One flat plateau: every rate is 6.4 GB/s.
/// let sweep = Sweep::from_pairs([(64, 10), (128, 20), (256, 40)])?;
///
/// let bandwidths = extract_bandwidth(&sweep, 1_000_000_000)?;
/// assert_eq!(bandwidths, vec![6.4e9]);
/// # Ok(())
/// # }
/// ```
pub fn extract_bandwidth(sweep: &Sweep, frequency_hz: u64) -> Result<Vec<f64>> {
    let clusters = bandwidth_clusters(sweep, frequency_hz)?;

    let mut bandwidths = Vec::with_capacity(clusters.len());
    for (level, cluster) in clusters.iter().enumerate() {
        if cluster.is_empty() {
            return Err(CarmError::DegenerateCluster { level });
        }
        bandwidths.push(cluster.mean_rate());
    }

    Ok(bandwidths)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const GHZ: u64 = 1_000_000_000;

    /// Sweep with the given per-point rates at 1 GHz, sizes 64, 128, ...
    fn sweep_with_rates(rates: &[f64]) -> Sweep {
        let pairs: Vec<(u64, u64)> = rates
            .iter()
            .enumerate()
            .map(|(i, rate)| {
                let size = 64 << i;
                let cycles = (GHZ as f64 * size as f64 / rate).round() as u64;
                (size, cycles)
            })
            .collect();
        Sweep::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_single_plateau_yields_one_level() {
        let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 6.4e9, 6.4e9]);
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths.len(), 1);
        assert!((bandwidths[0] - 6.4e9).abs() / 6.4e9 < 1e-6);
    }

    #[test]
    fn test_two_plateaus_yield_two_levels_in_order() {
        let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 6.4e9, 1.6e8, 1.6e8, 1.6e8]);
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths.len(), 2);
        assert!(bandwidths[0] > bandwidths[1]);
    }

    #[test]
    fn test_short_contradicted_run_is_discarded() {
        // Two fast points, then a long slow plateau. The two-point run is
        // below MIN_CLUSTER_LEN when contradicted, so it is dropped and
        // only the plateau is reported.
        let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 1.6e8, 1.6e8, 1.6e8]);
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths.len(), 1);
        assert!((bandwidths[0] - 1.6e8).abs() / 1.6e8 < 1e-6);
    }

    #[test]
    fn test_trailing_short_cluster_is_kept() {
        // The final two points open a new cluster that nothing
        // contradicts before the scan ends.
        let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 6.4e9, 1.6e8, 1.6e8]);
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths.len(), 2);
    }

    #[test]
    fn test_point_within_threshold_joins_cluster() {
        // 10% away from the running mean, inside the 20% threshold.
        let sweep = sweep_with_rates(&[1.0e9, 1.1e9, 0.95e9]);
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths.len(), 1);
    }

    #[test]
    fn test_single_point_sweep() {
        let sweep = Sweep::from_pairs([(64, 10)]).unwrap();
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths, vec![6.4e9]);
    }

    #[test]
    fn test_empty_sweep_is_rejected() {
        let sweep = Sweep::from_pairs([]).unwrap();
        let err = extract_bandwidth(&sweep, GHZ).unwrap_err();
        assert!(matches!(err, CarmError::InvalidInput { .. }));
    }

    #[test]
    fn test_zero_frequency_is_rejected() {
        let sweep = Sweep::from_pairs([(64, 10)]).unwrap();
        let err = extract_bandwidth(&sweep, 0).unwrap_err();
        assert!(err.to_string().contains("frequency"));
    }

    #[test]
    fn test_unsorted_sweep_is_rejected() {
        let sweep = Sweep::from_pairs([(128, 20), (64, 10)]).unwrap();
        let err = extract_bandwidth(&sweep, GHZ).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_trimming_keeps_at_least_one_point() {
        for n in 1usize..=8 {
            let mut points: Vec<(u64, f64)> =
                (0..n).map(|i| (64 << i, 1.0e9 + i as f64)).collect();
            trim_outliers(&mut points);
            assert!(!points.is_empty(), "cluster of {n} points was emptied");
            let expected_survivors = if n == 1 { 1 } else { n - (n / 2).max(1) };
            assert_eq!(points.len(), expected_survivors);
        }
    }

    #[test]
    fn test_trimming_removes_most_deviant_first() {
        // Mean of [1.0, 1.0, 1.0, 2.0] is 1.25; the 2.0 deviates most.
        let mut points = vec![(64, 1.0), (128, 1.0), (256, 1.0), (512, 2.0)];
        trim_outliers(&mut points);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|(_, rate)| *rate == 1.0));
    }

    #[test]
    fn test_trimming_tightens_cluster_mean() {
        // One noisy outlier inside an otherwise flat plateau; the
        // reported level must not be dragged toward it.
        let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 7.0e9, 6.4e9, 6.4e9]);
        let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();
        assert_eq!(bandwidths.len(), 1);
        assert!((bandwidths[0] - 6.4e9).abs() / 6.4e9 < 1e-2);
    }

    #[test]
    fn test_bandwidths_are_finite() {
        let sweep = sweep_with_rates(&[6.4e9, 6.3e9, 6.5e9, 1.6e8, 1.5e8, 1.7e8]);
        for bandwidth in extract_bandwidth(&sweep, GHZ).unwrap() {
            assert!(bandwidth.is_finite());
        }
    }

    #[test]
    fn test_clusters_expose_trimmed_points() {
        let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 6.4e9, 6.4e9]);
        let clusters = bandwidth_clusters(&sweep, GHZ).unwrap();
        assert_eq!(clusters.len(), 1);
        // 4 points, 2 trimmed.
        assert_eq!(clusters[0].len(), 2);
    }
}

//! Behavioral tests for the bandwidth clustering and peak extraction
//!
//! These tests exercise the extraction pipeline through the public API
//! with synthetic sweeps shaped like real cache staircases.

use carm_rs::analysis::{extract_bandwidth, extract_peak_performance};
use carm_rs::model::build_model;
use carm_rs::sweep::{BenchmarkData, Sweep};
use carm_rs::CarmError;

mod common;
use common::{relative_error, sweep_with_rates, two_level_benchmark};

const GHZ: u64 = 1_000_000_000;

#[test]
fn homogeneous_sweep_yields_single_bandwidth() {
    // Every rate within 20% of a single value: one cluster.
    let sweep = sweep_with_rates(&[1.0e9, 1.05e9, 0.97e9, 1.02e9, 1.01e9], GHZ);

    let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();

    assert_eq!(bandwidths.len(), 1);
    assert!(relative_error(bandwidths[0], 1.0e9) < 0.1);
}

#[test]
fn well_separated_plateaus_map_to_levels_in_input_order() {
    // Three plateaus, each more than 20% below the previous one and at
    // least 3 points long. Typical L1 / L2 / DRAM staircase.
    let sweep = sweep_with_rates(
        &[
            3.2e11, 3.1e11, 3.2e11, 3.3e11, // L1
            1.1e11, 1.0e11, 1.05e11, // L2
            2.0e10, 2.1e10, 1.9e10, // DRAM
        ],
        GHZ,
    );

    let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();

    assert_eq!(bandwidths.len(), 3);
    assert!(bandwidths[0] > bandwidths[1]);
    assert!(bandwidths[1] > bandwidths[2]);
    assert!(relative_error(bandwidths[0], 3.2e11) < 0.1);
    assert!(relative_error(bandwidths[2], 2.0e10) < 0.1);
}

#[test]
fn transient_runs_shorter_than_three_points_are_not_levels() {
    // The benchmark's documented reference sweep: the first plateau has
    // only two points, so the arrival of the 256-byte point discards it
    // as a transient and a single level survives.
    let memory: Sweep = serde_json::from_str(
        r#"{"64": 10, "128": 20, "256": 1600, "512": 3200, "1024": 6400}"#,
    )
    .unwrap();

    let bandwidths = extract_bandwidth(&memory, GHZ).unwrap();

    assert_eq!(bandwidths.len(), 1);
    assert!(relative_error(bandwidths[0], 1.6e8) < 1e-9);
}

#[test]
fn three_point_plateaus_survive_the_scan() {
    // Same staircase with the first plateau extended to three points:
    // both levels are reported, fastest first.
    let benchmark = two_level_benchmark();

    let bandwidths = extract_bandwidth(&benchmark.memory, GHZ).unwrap();

    assert_eq!(bandwidths.len(), 2);
    assert!(relative_error(bandwidths[0], 6.4e9) < 1e-9);
    assert!(relative_error(bandwidths[1], 1.6e8) < 1e-9);
}

#[test]
fn noisy_plateau_is_tightened_by_trimming() {
    // A plateau with two noisy excursions still inside the join
    // threshold. The trimmed mean must land near the clean value.
    let sweep = sweep_with_rates(&[6.4e9, 6.4e9, 7.3e9, 6.4e9, 5.8e9, 6.4e9], GHZ);

    let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();

    assert_eq!(bandwidths.len(), 1);
    assert!(relative_error(bandwidths[0], 6.4e9) < 0.02);
}

#[test]
fn every_reported_bandwidth_is_finite_and_positive() {
    let sweep = sweep_with_rates(
        &[3.2e11, 3.0e11, 3.4e11, 1.0e11, 1.1e11, 0.95e11, 2.0e10, 2.2e10, 1.8e10],
        GHZ,
    );

    for bandwidth in extract_bandwidth(&sweep, GHZ).unwrap() {
        assert!(bandwidth.is_finite());
        assert!(bandwidth > 0.0);
    }
}

#[test]
fn single_point_sweep_reports_its_own_rate() {
    let sweep = Sweep::from_pairs([(64, 10)]).unwrap();

    let bandwidths = extract_bandwidth(&sweep, GHZ).unwrap();

    assert_eq!(bandwidths, vec![6.4e9]);
}

#[test]
fn peak_performance_matches_reference_ramp() {
    // rates 2e9, 2.22e9, 4e9: the ceiling is 4 GOps/s.
    let sweep = Sweep::from_pairs([(100, 50), (200, 90), (400, 100)]).unwrap();

    assert_eq!(extract_peak_performance(&sweep, GHZ).unwrap(), 4.0e9);
}

#[test]
fn peak_performance_ignores_input_order() {
    let orders: [&[(u64, u64)]; 3] = [
        &[(100, 50), (200, 90), (400, 100)],
        &[(400, 100), (200, 90), (100, 50)],
        &[(200, 90), (400, 100), (100, 50)],
    ];

    for pairs in orders {
        let sweep = Sweep::from_pairs(pairs.iter().copied()).unwrap();
        assert_eq!(extract_peak_performance(&sweep, GHZ).unwrap(), 4.0e9);
    }
}

#[test]
fn empty_sweeps_are_rejected() {
    let empty = Sweep::from_pairs([]).unwrap();

    assert!(matches!(
        extract_bandwidth(&empty, GHZ),
        Err(CarmError::InvalidInput { .. })
    ));
    assert!(matches!(
        extract_peak_performance(&empty, GHZ),
        Err(CarmError::InvalidInput { .. })
    ));
}

#[test]
fn unsorted_memory_sweep_is_rejected() {
    let sweep = Sweep::from_pairs([(1024, 6400), (64, 10), (128, 20)]).unwrap();

    let err = extract_bandwidth(&sweep, GHZ).unwrap_err();

    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn build_model_combines_both_extractors() {
    let model = build_model(&two_level_benchmark(), GHZ).unwrap();

    assert_eq!(model.bandwidths.len(), 2);
    assert_eq!(model.peak_performance, 4.0e9);
    assert_eq!(model.frequency_hz, GHZ);
}

#[test]
fn build_model_propagates_arithmetic_errors() {
    let benchmark = BenchmarkData {
        memory: two_level_benchmark().memory,
        arithmetic: Sweep::from_pairs([]).unwrap(),
    };

    assert!(matches!(
        build_model(&benchmark, GHZ),
        Err(CarmError::InvalidInput { .. })
    ));
}

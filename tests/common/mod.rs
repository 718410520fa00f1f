//! Helper functions for integration tests

use carm_rs::sweep::{BenchmarkData, Sweep};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Build a sweep whose points hit the given rates at `frequency_hz`,
/// with sizes 4Ki, 8Ki, 16Ki, ... in ascending order. The sizes are
/// large enough that rounding the cycle counts keeps every
/// reconstructed rate within a fraction of a percent of the target,
/// even for rates in the hundreds of GB/s.
pub fn sweep_with_rates(rates: &[f64], frequency_hz: u64) -> Sweep {
    let pairs: Vec<(u64, u64)> = rates
        .iter()
        .enumerate()
        .map(|(i, rate)| {
            let size = 4096u64 << i;
            let cycles = (frequency_hz as f64 * size as f64 / rate).round() as u64;
            (size, cycles)
        })
        .collect();
    Sweep::from_pairs(pairs).expect("synthetic sweep is valid")
}

/// Benchmark record with two clean memory plateaus (6.4 GB/s and
/// 160 MB/s, three points each) and a three-point arithmetic ramp
/// peaking at 4 GOps/s, all at 1 GHz.
pub fn two_level_benchmark() -> BenchmarkData {
    BenchmarkData {
        memory: Sweep::from_pairs([
            (64, 10),
            (128, 20),
            (192, 30),
            (256, 1600),
            (512, 3200),
            (1024, 6400),
        ])
        .expect("memory sweep is valid"),
        arithmetic: Sweep::from_pairs([(100, 50), (200, 90), (400, 100)])
            .expect("arithmetic sweep is valid"),
    }
}

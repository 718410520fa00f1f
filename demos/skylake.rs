//! Example: CARM extraction over a Skylake-like synthetic machine
//!
//! Builds the roofline model from synthetic sweeps shaped like a
//! four-level cache hierarchy measured at 3.2 GHz:
//!
//! - L1: ~410 GB/s
//! - L2: ~150 GB/s
//! - L3: ~60 GB/s
//! - DRAM: ~18 GB/s
//! - Peak FMA throughput: ~100 GOps/s
//!
//! Writes the CARM JSON and the diagnostic chart into the system temp
//! directory and prints the detected levels.

use carm_rs::analysis::bandwidth_clusters;
use carm_rs::model::build_model;
use carm_rs::output::visualization::with_base10_prefix;
use carm_rs::output::{export_model_json, plot_roofline_diagnostics};
use carm_rs::sweep::{BenchmarkData, Sweep};

/// Cycle count hitting `rate` for `size` at `frequency_hz`, with a
/// deterministic jitter factor standing in for measurement noise.
fn cycles_for(size: u64, rate: f64, jitter: f64, frequency_hz: u64) -> u64 {
    (frequency_hz as f64 * size as f64 / (rate * jitter))
        .round()
        .max(1.0) as u64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  CARM Extraction - Synthetic Skylake Hierarchy");
    println!("═══════════════════════════════════════════════════════\n");

    let frequency_hz: u64 = 3_200_000_000;

    // ====== Memory sweep: four plateaus, six points each ======

    let levels = [4.1e11, 1.5e11, 6.0e10, 1.8e10];
    let jitters = [1.0, 0.98, 1.03, 0.99, 1.01, 0.97];

    let mut memory_pairs = Vec::new();
    let mut size: u64 = 4096;
    for rate in levels {
        for jitter in jitters {
            memory_pairs.push((size, cycles_for(size, rate, jitter, frequency_hz)));
            size *= 2;
        }
    }

    // ====== Arithmetic sweep: ramp saturating at ~100 GOps/s ======

    let arithmetic_pairs: Vec<(u64, u64)> = [
        (1_000, 6.0e10),
        (4_000, 8.5e10),
        (16_000, 9.6e10),
        (64_000, 1.0e11),
        (256_000, 9.9e10),
    ]
    .into_iter()
    .map(|(ops, rate)| (ops, cycles_for(ops, rate, 1.0, frequency_hz)))
    .collect();

    let benchmark = BenchmarkData {
        memory: Sweep::from_pairs(memory_pairs)?,
        arithmetic: Sweep::from_pairs(arithmetic_pairs)?,
    };

    println!("Input:");
    println!("  Frequency       : {} Hz", frequency_hz);
    println!("  Memory points   : {}", benchmark.memory.len());
    println!("  Arithmetic pts  : {}\n", benchmark.arithmetic.len());

    // ====== Extraction ======

    let model = build_model(&benchmark, frequency_hz)?;
    let clusters = bandwidth_clusters(&benchmark.memory, frequency_hz)?;

    println!("Detected cache levels:");
    for (level, bandwidth) in model.bandwidths.iter().enumerate() {
        println!(
            "  L{} : {}B/s  ({} surviving points)",
            level + 1,
            with_base10_prefix(*bandwidth, 2),
            clusters[level].len(),
        );
    }
    println!(
        "\nPeak performance : {}Ops/s\n",
        with_base10_prefix(model.peak_performance, 2)
    );

    // ====== Output artifacts ======

    let tmp_dir = std::env::temp_dir();
    let json_path = tmp_dir.join("skylake_carm.json");
    let plot_path = tmp_dir.join("skylake_carm.png");

    export_model_json(&model, &json_path)?;
    plot_roofline_diagnostics(
        &benchmark,
        &clusters,
        &model,
        &plot_path.to_string_lossy(),
        None,
    )?;

    println!("CARM JSON  : {}", json_path.display());
    println!("Diagnostic : {}", plot_path.display());

    Ok(())
}

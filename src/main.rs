//! carm - CARM Builder CLI
//!
//! Builds the Cache-Aware Roofline Model from benchmark results.
//!
//! Usage:
//!   carm results.json 3200000000                 # print CARM JSON to stdout
//!   carm results.json 3200000000 -o carm.json    # write CARM JSON to a file
//!   carm results.json 3200000000 -p carm.png     # also render the diagnostic chart

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use carm_rs::analysis::bandwidth_clusters;
use carm_rs::model::build_model;
use carm_rs::output::{export_model_json, model_to_json, plot_roofline_diagnostics};
use carm_rs::sweep::BenchmarkData;

/// Tool to build the CARM from benchmark results
#[derive(Parser)]
#[command(name = "carm", version, about, long_about = None)]
struct Cli {
    /// Path to the JSON file containing benchmark results
    input: PathBuf,

    /// Frequency of the core in Hz
    frequency: u64,

    /// Destination path for the JSON file containing the CARM data,
    /// outputs to stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Destination path for the memory and arithmetic plot
    #[arg(short, long, value_name = "PLOT_PATH")]
    plot: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&cli.input)?;
    let benchmark: BenchmarkData = serde_json::from_str(&text)?;

    let model = build_model(&benchmark, cli.frequency)?;

    if let Some(plot_path) = &cli.plot {
        let clusters = bandwidth_clusters(&benchmark.memory, cli.frequency)?;
        let path = plot_path.to_string_lossy();
        plot_roofline_diagnostics(&benchmark, &clusters, &model, &path, None)?;
    }

    match &cli.output {
        Some(path) => export_model_json(&model, path)?,
        None => println!("{}", model_to_json(&model)?),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("carm: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

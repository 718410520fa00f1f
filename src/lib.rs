//! carm-rs: Cache-Aware Roofline Model Builder
//!
//! Derives a Cache-Aware Roofline Model (CARM) from raw microbenchmark
//! timing data: the memory bandwidth of each cache level and the peak
//! arithmetic throughput of a processor core. The crate post-processes
//! already-collected timing samples; it does not run the benchmarks.
//!
//! # Architecture
//!
//! Two independent extractors feed a single aggregation step:
//!
//! 1. **Bandwidth extraction**: turns the bytes-versus-cycles memory
//!    sweep into a bandwidth curve, segments it into cache-level
//!    plateaus with an online clustering scan, and reduces each plateau
//!    to one representative bandwidth.
//! 2. **Peak performance extraction**: turns the operations-versus-
//!    cycles sweep into a performance curve and takes its maximum.
//!
//! [`build_model`](model::build_model) assembles both into an immutable
//! [`CarmModel`](model::CarmModel). Persistence and charting are
//! optional collaborators in [`output`] composed by the caller; the
//! extraction core performs no I/O and holds no shared state.
//!
//! # Quick Start
//!
//! ```rust
//! use carm_rs::prelude::*;
//!
//! # fn main() -> Result<(), carm_rs::CarmError> {
//! // Three-point plateaus at 6.4 GB/s and 160 MB/s, measured at 1 GHz.
//! let benchmark = BenchmarkData {
//!     memory: Sweep::from_pairs([
//!         (64, 10),
//!         (128, 20),
//!         (192, 30),
//!         (256, 1600),
//!         (512, 3200),
//!         (1024, 6400),
//!     ])?,
//!     arithmetic: Sweep::from_pairs([(100, 50), (200, 90), (400, 100)])?,
//! };
//!
//! let model = build_model(&benchmark, 1_000_000_000)?;
//!
//! assert_eq!(model.bandwidths.len(), 2);
//! assert_eq!(model.peak_performance, 4.0e9);
//! # Ok(())
//! # }
//! ```
//!
//! Benchmark input usually arrives as JSON instead:
//!
//! ```rust
//! use carm_rs::sweep::BenchmarkData;
//!
//! let benchmark: BenchmarkData = serde_json::from_str(
//!     r#"{
//!         "memory": {"64": 10, "128": 20, "192": 30},
//!         "arithmetic": {"100": 50, "400": 100}
//!     }"#,
//! ).unwrap();
//!
//! assert_eq!(benchmark.memory.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`sweep`]: Benchmark input data model
//! - [`analysis`]: Bandwidth and peak-performance extractors
//! - [`model`]: CARM record and model assembly
//! - [`error`]: Error taxonomy
//! - [`output`]: JSON persistence and diagnostic charting (optional)

// Core modules
pub mod analysis;
pub mod error;
pub mod model;
pub mod sweep;

pub mod output;

pub use error::{CarmError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use carm_rs::prelude::*;
    //! ```
    pub use crate::analysis::{
        bandwidth_clusters, extract_bandwidth, extract_peak_performance, Cluster,
    };
    pub use crate::error::{CarmError, Result};
    pub use crate::model::{build_model, CarmModel};
    pub use crate::output::{export_model_json, model_to_json, plot_roofline_diagnostics};
    pub use crate::sweep::{BenchmarkData, SamplePoint, Sweep};
}

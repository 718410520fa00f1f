//! Sweep analysis
//!
//! This module turns raw benchmark sweeps into the two quantities a
//! cache-aware roofline model is made of:
//!
//! - **Bandwidth extraction** ([`extract_bandwidth`]): converts the
//!   bytes-versus-cycles memory sweep into a bandwidth curve, segments
//!   the curve into cache-level plateaus, and reduces each plateau to
//!   one representative bandwidth.
//! - **Peak performance extraction** ([`extract_peak_performance`]):
//!   converts the operations-versus-cycles sweep into a performance
//!   curve and takes its ceiling.
//!
//! Both extractors are pure functions over in-memory sweeps. There is no
//! I/O, no shared state, and every pass is linear in the sweep length,
//! so they are safe to call from any number of independent call sites.
//!
//! # Clustering policy
//!
//! The bandwidth curve of a real machine is a staircase: flat plateaus
//! (one per cache level) joined by steep drops, blurred by measurement
//! noise. The segmentation is a single left-to-right scan with two fixed
//! policy constants:
//!
//! - [`CLUSTER_THRESHOLD`]: a point belongs to the running cluster while
//!   its rate stays within 20% of the cluster mean.
//! - [`MIN_CLUSTER_LEN`]: a running cluster shorter than 3 points is a
//!   measurement transient, not a cache level; when contradicted it is
//!   discarded rather than closed.
//!
//! See [`bandwidth`] for the full pass-by-pass description.

pub mod bandwidth;
pub mod peak;

/// Maximum relative deviation from the running cluster mean for a point
/// to join the cluster.
pub const CLUSTER_THRESHOLD: f64 = 0.2;

/// Minimum number of points for a running cluster to be closed as a
/// cache level instead of discarded when a deviating point arrives.
pub const MIN_CLUSTER_LEN: usize = 3;

// Re-export commonly used items for convenience
pub use bandwidth::{bandwidth_clusters, extract_bandwidth, Cluster};
pub use peak::extract_peak_performance;

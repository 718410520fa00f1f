//! Diagnostic chart generation for CARM extraction
//!
//! This module uses the `plotters` library to render the extraction
//! diagnostics as a single image with two side-by-side log-log panels:
//!
//! - **Memory panel**: the measured bandwidth curve, the surviving
//!   cluster points of each detected cache level, and a dotted
//!   reference line at each level's representative bandwidth.
//! - **Arithmetic panel**: the measured performance curve and a dotted
//!   reference line at the peak performance.
//!
//! Axis ticks and annotations carry human-readable magnitude prefixes:
//! binary prefixes (Ki, Mi, Gi) on the x axes, SI prefixes (k, M, G) on
//! the y axes and reference-line labels.
//!
//! The output backend is chosen by file extension, `.svg` for vector
//! output and bitmap PNG otherwise.

pub mod config;
pub mod format;
pub mod roofline;

// Re-exports for convenience
pub use config::PlotConfig;
pub use format::{with_base10_prefix, with_base2_prefix};
pub use roofline::plot_roofline_diagnostics;

//! Output collaborators for CARM results
//!
//! The core extraction is pure; this module holds its optional side
//! effects:
//!
//! - **Export**: the JSON persistence collaborator. Writes the model
//!   record to a file, or renders it to a string for stdout.
//! - **Visualization**: the charting collaborator. Renders the two
//!   diagnostic log-log panels (memory bandwidth and arithmetic
//!   performance) with plotters.
//!
//! Callers compose these with [`build_model`](crate::model::build_model)
//! as needed; omitting either collaborator skips that side effect.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use carm_rs::output::{export_model_json, plot_roofline_diagnostics};
//!
//! export_model_json(&model, "carm.json")?;
//! plot_roofline_diagnostics(&benchmark, &clusters, &model, "carm.png", None)?;
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_model_json, import_model_json, model_to_json};

pub use visualization::{plot_roofline_diagnostics, PlotConfig};

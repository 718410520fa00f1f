//! JSON export for CARM results
//!
//! Writes the model record in the fixed-field JSON format consumed by
//! downstream roofline tooling, pretty-printed for human inspection:
//!
//! ```json
//! {
//!     "bandwidths": [6.4e9, 1.6e8],
//!     "peak_performance": 4.0e9,
//!     "frequency_hz": 1000000000
//! }
//! ```
//!
//! # Quick Examples
//!
//! ```rust,ignore
//! use carm_rs::output::export::{export_model_json, model_to_json};
//!
//! // To a file
//! export_model_json(&model, "carm.json")?;
//!
//! // To stdout
//! println!("{}", model_to_json(&model)?);
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::CarmModel;

/// Render the model as pretty-printed JSON.
pub fn model_to_json(model: &CarmModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

/// Write the model as pretty-printed JSON to `output_path`.
///
/// # Errors
///
/// Returns [`CarmError::Io`](crate::CarmError::Io) when the file cannot
/// be created or written.
pub fn export_model_json(model: &CarmModel, output_path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(output_path)?;
    writeln!(file, "{}", model_to_json(model)?)?;
    Ok(())
}

/// Read a model back from a JSON file written by [`export_model_json`].
///
/// # Errors
///
/// Returns [`CarmError::Io`](crate::CarmError::Io) on read failure and
/// [`CarmError::Json`](crate::CarmError::Json) on a malformed record.
pub fn import_model_json(input_path: impl AsRef<Path>) -> Result<CarmModel> {
    let text = std::fs::read_to_string(input_path)?;
    Ok(serde_json::from_str(&text)?)
}

// =================================================================================================
// Tests
// =================================================================================================

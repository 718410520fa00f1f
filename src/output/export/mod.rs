//! Data export for CARM results

pub mod json;

pub use json::{export_model_json, import_model_json, model_to_json};

//! Error types for CARM extraction.
//!
//! The core computation is deterministic and stateless, so every error is
//! terminal: invalid input is surfaced to the caller, never retried.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarmError>;

/// Error type for CARM extraction and model assembly.
///
/// # Examples
///
/// ```
/// use carm_rs::CarmError;
///
/// let err = CarmError::invalid_input("memory sweep is empty");
/// assert!(err.to_string().contains("memory sweep is empty"));
/// ```
#[derive(Debug)]
pub enum CarmError {
    /// The input violates a precondition of the extractors.
    ///
    /// Covers empty sweeps, zero sizes or cycle counts, duplicate keys,
    /// and memory sweeps whose sizes are not strictly increasing.
    InvalidInput {
        /// Description of the violated precondition
        reason: String,
    },

    /// Outlier trimming left a cluster with no surviving points.
    ///
    /// Reported instead of averaging an empty cluster into a NaN.
    DegenerateCluster {
        /// Zero-based index of the cache level whose cluster collapsed
        level: usize,
    },

    /// I/O error while reading benchmark data or writing the model.
    Io(std::io::Error),

    /// Malformed benchmark or model JSON.
    ///
    /// Missing `memory`/`arithmetic` sections, non-numeric keys, and
    /// non-positive cycle counts are reported through this variant with
    /// the offending key in the message.
    Json(serde_json::Error),
}

impl CarmError {
    /// Build an [`CarmError::InvalidInput`] from any displayable reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::DegenerateCluster { level } => {
                write!(
                    f,
                    "degenerate cluster: level {level} has no surviving points after trimming"
                )
            }
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for CarmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CarmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CarmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = CarmError::invalid_input("arithmetic sweep is empty");
        assert_eq!(
            err.to_string(),
            "invalid input: arithmetic sweep is empty"
        );
    }

    #[test]
    fn test_degenerate_cluster_names_level() {
        let err = CarmError::DegenerateCluster { level: 2 };
        assert!(err.to_string().contains("level 2"));
    }

    #[test]
    fn test_io_error_is_chained() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CarmError::from(io);
        assert!(err.source().is_some());
    }
}

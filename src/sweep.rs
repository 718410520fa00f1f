//! Benchmark sweep data model
//!
//! This module provides the containers consumed by the extractors:
//!
//! - **Sample Point**: one benchmark observation (transferred bytes or
//!   executed operations, and the cycles it took)
//! - **Sweep**: an ordered sequence of sample points
//! - **Benchmark Data**: the full input record with one memory sweep and
//!   one arithmetic sweep
//!
//! # Ordering
//!
//! A sweep preserves insertion order. Bandwidth clustering is a
//! left-to-right scan over the curve, so the traversal order of the
//! memory sweep carries meaning: it must follow the benchmark's working
//! set from small to large. The sweep is therefore stored as explicit
//! ordered pairs rather than a sorted map, and deserialization keeps the
//! JSON document order.
//!
//! # Example
//!
//! ```
//! use carm_rs::sweep::Sweep;
//!
//! # fn main() -> Result<(), carm_rs::CarmError> {
//! let sweep = Sweep::from_pairs([(64, 10), (128, 20)])?;
//!
//! assert_eq!(sweep.len(), 2);
//!
//! // rate = frequency * size / cycles
//! let rates = sweep.rates(1_000_000_000);
//! assert_eq!(rates[0], 6.4e9);
//! # Ok(())
//! # }
//! ```

use nalgebra::DVector;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

use crate::error::{CarmError, Result};

// =================================================================================================
// Sample Point
// =================================================================================================

/// One benchmark observation.
///
/// `size` is the varied parameter of the sweep: transferred bytes for a
/// memory sweep, executed operations for an arithmetic sweep. `cycles`
/// is the elapsed cycle count measured for that size.
///
/// Both values are at least 1. A zero cycle count would divide by zero
/// when deriving the rate, and a zero size describes no work at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePoint {
    /// Transferred bytes or executed operations
    pub size: u64,

    /// Elapsed cycles measured for this size
    pub cycles: u64,
}

impl SamplePoint {
    /// Derived rate at the given clock frequency.
    ///
    /// For a memory sweep this is bandwidth in B/s, for an arithmetic
    /// sweep performance in Ops/s.
    pub fn rate(&self, frequency_hz: u64) -> f64 {
        frequency_hz as f64 * self.size as f64 / self.cycles as f64
    }
}

// =================================================================================================
// Sweep
// =================================================================================================

/// Ordered sequence of sample points from one microbenchmark run.
///
/// Keys (sizes) are unique; insertion order is the input order and is
/// never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    points: Vec<SamplePoint>,
}

impl Sweep {
    // ======================================= constructors =======================================

    /// Build a sweep from `(size, cycles)` pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CarmError::InvalidInput`] when a size or cycle count is
    /// zero, or when a size appears twice.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, u64)>) -> Result<Self> {
        let pairs = pairs.into_iter();
        let mut points = Vec::with_capacity(pairs.size_hint().0);
        let mut seen = HashSet::new();

        for (size, cycles) in pairs {
            if size == 0 {
                return Err(CarmError::invalid_input("sample size must be at least 1"));
            }
            if cycles == 0 {
                return Err(CarmError::invalid_input(format!(
                    "sample {size} has a zero cycle count"
                )));
            }
            if !seen.insert(size) {
                return Err(CarmError::invalid_input(format!(
                    "duplicate sample size {size}"
                )));
            }
            points.push(SamplePoint { size, cycles });
        }

        Ok(Self { points })
    }

    // ========================================== Queries ==========================================

    /// Sample points in input order.
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check emptiness.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether sizes strictly increase along the sweep.
    ///
    /// The bandwidth extractor requires this of memory sweeps; see
    /// [`extract_bandwidth`](crate::analysis::extract_bandwidth).
    pub fn is_strictly_ascending(&self) -> bool {
        self.points.windows(2).all(|w| w[0].size < w[1].size)
    }

    // ======================================== Derivations ========================================

    /// Rate curve at the given clock frequency, in input order.
    pub fn rates(&self, frequency_hz: u64) -> DVector<f64> {
        DVector::from_iterator(
            self.points.len(),
            self.points.iter().map(|p| p.rate(frequency_hz)),
        )
    }
}

impl fmt::Display for Sweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sweep [{} points]", self.points.len())
    }
}

// =================================================================================================
// Deserialization
// =================================================================================================

// The input format maps stringified sizes to cycle counts, e.g.
// {"64": 10, "128": 20}. Keys are parsed during deserialization and the
// document order of the map becomes the sweep order.
impl<'de> Deserialize<'de> for Sweep {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SweepVisitor;

        impl<'de> Visitor<'de> for SweepVisitor {
            type Value = Sweep;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of stringified sizes to cycle counts")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Sweep, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((key, cycles)) = map.next_entry::<String, u64>()? {
                    let size: u64 = key.parse().map_err(|_| {
                        de::Error::custom(format!("benchmark key {key:?} is not an integer"))
                    })?;
                    pairs.push((size, cycles));
                }

                Sweep::from_pairs(pairs).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(SweepVisitor)
    }
}

// =================================================================================================
// Benchmark Data
// =================================================================================================

/// Full benchmark input record.
///
/// Mirrors the JSON layout produced by the benchmark harness:
///
/// ```json
/// {
///     "memory": { "64": 10, "128": 20 },
///     "arithmetic": { "100": 50, "200": 90 }
/// }
/// ```
///
/// The `memory` sweep is expected in ascending working-set order; the
/// `arithmetic` sweep order is irrelevant.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkData {
    /// Bytes-versus-cycles sweep
    pub memory: Sweep,

    /// Operations-versus-cycles sweep
    pub arithmetic: Sweep,
}

// ==================== Tests ====================

//! Peak performance extraction from the arithmetic sweep
//!
//! No clustering here. The arithmetic benchmark ramps the operation
//! count toward the machine's throughput ceiling, so the maximum
//! observed rate is the peak-performance estimate. The result does not
//! depend on the order of the sweep.

use crate::error::{CarmError, Result};
use crate::sweep::Sweep;

/// Return the peak arithmetic performance from the arithmetic sweep.
///
/// Computes `rate = frequency * ops / cycles` for every point and takes
/// the maximum, in Ops/s.
///
/// # Errors
///
/// [`CarmError::InvalidInput`] when the sweep is empty.
///
/// # Example
///
/// ```
/// use carm_rs::analysis::extract_peak_performance;
/// use carm_rs::sweep::Sweep;
///
/// # fn main() -> Result<(), carm_rs::CarmError> {
/// let sweep = Sweep::from_pairs([(100, 50), (200, 90), (400, 100)])?;
///
/// let peak = extract_peak_performance(&sweep, 1_000_000_000)?;
/// assert_eq!(peak, 4.0e9);
/// # Ok(())
/// # }
/// ```
pub fn extract_peak_performance(sweep: &Sweep, frequency_hz: u64) -> Result<f64> {
    if frequency_hz == 0 {
        return Err(CarmError::invalid_input("clock frequency must be positive"));
    }

    if sweep.is_empty() {
        return Err(CarmError::invalid_input("arithmetic sweep is empty"));
    }

    Ok(sweep.rates(frequency_hz).max())
}

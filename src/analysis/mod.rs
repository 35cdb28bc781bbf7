//! Region analysis: energy, average current, and average power over a
//! selected time interval.
//!
//! The analyzer is a pure function of (trace, selection, supply voltage).
//! Integration uses the trapezoidal rule over the full-resolution samples
//! inside the selection; the chart's rendering downsample never feeds it.

use thiserror::Error;

use crate::parsers::Trace;
use crate::state::Selection;

/// Errors that can occur during region analysis
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    /// The trace has no samples at all
    #[error("trace has no samples")]
    EmptyTrace,
    /// The selection has zero width, so the time-weighted averages are
    /// undefined. Flagged explicitly instead of dividing by zero.
    #[error("selection at t={at} s has zero width")]
    DegenerateSelection { at: f64 },
}

/// Aggregates computed for one selected region
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionSummary {
    /// Energy consumed in the region, joules
    pub energy_j: f64,
    /// Time-weighted mean current, amps
    pub avg_current_a: f64,
    /// Mean power, watts
    pub avg_power_w: f64,
    /// Nominal selection width `hi - lo`, seconds (not the span of the
    /// first/last included sample)
    pub delta_t_s: f64,
    /// Number of samples that fell inside the selection
    pub samples: usize,
}

/// Trapezoidal-rule integral of `values` with respect to `times`.
///
/// For samples `(t_0,v_0) .. (t_n,v_n)` sorted by time this is
/// `sum (t_{i+1}-t_i) * (v_i + v_{i+1}) / 2`. Fewer than two samples
/// integrate to exactly 0.
pub fn trapezoid(times: &[f64], values: &[f64]) -> f64 {
    debug_assert_eq!(times.len(), values.len());
    if times.len() < 2 {
        return 0.0;
    }
    times
        .windows(2)
        .zip(values.windows(2))
        .map(|(t, v)| (t[1] - t[0]) * (v[0] + v[1]) / 2.0)
        .sum()
}

/// Compute the region aggregates for `selection` at `supply_voltage` volts.
///
/// The trace stores current in mA; the integral is converted to A·s
/// (coulombs) before deriving the aggregates:
///
/// - energy = supply_voltage * integral of current dt
/// - average current = integral of current dt / (hi - lo)
/// - average power = average current * supply_voltage
///
/// A selection disjoint from the trace extent is not an error: the empty
/// slice integrates to 0, so all three aggregates are 0.
pub fn analyze_region(
    trace: &Trace,
    selection: Selection,
    supply_voltage: f64,
) -> Result<RegionSummary, RegionError> {
    if trace.is_empty() {
        return Err(RegionError::EmptyTrace);
    }

    let delta_t_s = selection.width();
    if delta_t_s == 0.0 {
        return Err(RegionError::DegenerateSelection { at: selection.lo });
    }

    let (times, currents) = trace.slice_range(selection.lo, selection.hi);
    let charge_c = trapezoid(times, currents) / 1000.0; // mA·s -> A·s
    let avg_current_a = charge_c / delta_t_s;

    Ok(RegionSummary {
        energy_j: charge_c * supply_voltage,
        avg_current_a,
        avg_power_w: avg_current_a * supply_voltage,
        delta_t_s,
        samples: times.len(),
    })
}

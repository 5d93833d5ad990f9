//! Fixed-step approximation engines.
//!
//! This module provides the two numerical estimates computed for every case.
//!
//! ## Taylor expansion (order 2)
//!
//! The truncated expansion around the initial state:
//!
//! ```text
//! y(t+h) = y(t) + h*f + (h^2/2)*f*f_y
//! ```
//!
//! The response has no explicit time dependence, so the f_t term drops out.
//! The step is the nominal step refined by [`STEP_REFINEMENT`], both terms
//! are scaled by [`MAGNITUDE_SCALE`] to keep the logarithmic response in a
//! safe numeric range, and the sum is clamped to the saturation-current
//! floor and [`CURRENT_CEILING`].
//!
//! ## Picard iteration
//!
//! Successive substitution of the previous iterate into the resistor-law
//! map, run for exactly [`PICARD_ITERATIONS`] steps with no convergence
//! check. Iterates are reported raw: the Taylor path clamps, the Picard
//! path does not.

pub mod picard;
pub mod taylor;

mod runner;

pub use runner::run_case;

/// Number of Picard iterations per case.
pub const PICARD_ITERATIONS: usize = 3;

/// Divisor refining the nominal step, chosen empirically for stability with
/// the exponential-like response.
pub const STEP_REFINEMENT: f64 = 1000.0;

/// Scale factor applied to the Taylor terms to suppress overflow near small
/// saturation currents. A numeric-range guard, not a unit conversion.
pub const MAGNITUDE_SCALE: f64 = 1e-9;

/// Hard ceiling on the Taylor estimate, in amperes.
pub const CURRENT_CEILING: f64 = 1.0;

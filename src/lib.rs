//! # Diodyne
//!
//! A batch evaluator for diode circuit currents using fixed-order
//! approximation schemes.
//!
//! This library provides:
//! - The Shockley diode model and the circuit responses derived from it
//! - A truncated order-2 Taylor expansion of the current response
//! - A fixed three-step Picard substitution iteration
//! - Comma-separated table input and output for batch runs
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`model`] - Diode equation and circuit response functions
//! - [`case`] - Parsed problem cases and their results
//! - [`solver`] - Taylor and Picard approximation schemes
//! - [`table`] - Case table parsing and result table writing
//! - [`report`] - Human-readable per-case reports (CLI only)
//!
//! ## Usage
//!
//! ```bash
//! diodyne cases.csv -o results.csv
//! ```
//!
//! ## Evaluation Method
//!
//! Every case is evaluated twice, from the same seed current I:
//!
//! 1. A Taylor expansion truncated after the second-order term,
//!    y(t+h) = y(t) + h f + (h^2/2) f f', evaluated over one refined
//!    step of the nominal window and clamped to the physical range.
//! 2. Three Picard iterates y_{k+1} = g(y_k), where g maps a current
//!    through the diode voltage and, when present, the series resistor.
//!
//! The circuit current reported for a case is the third Picard iterate,
//! pushed through the resistor branch law once more when the case has a
//! series resistor.

pub mod case;
pub mod error;
pub mod model;
pub mod solver;
pub mod table;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use case::{ApproximationResult, CircuitCase, ProblemKind};
pub use error::{DiodyneError, Result};
pub use solver::run_case;

/// Width of the nominal integration window.
pub const NOMINAL_STEP: f64 = 0.1;

/// Start time of the integration window.
pub const INITIAL_TIME: f64 = 0.0;

/// Initial value of the approximated current at the window start.
pub const INITIAL_VALUE: f64 = 0.0;

//! Diode model.
//!
//! Uses the Shockley diode equation solved for voltage:
//!   V = n * Vt * ln(I/Is + 1)
//!
//! The rate term driving the Taylor expansion divides through by Is:
//!   f(I) = (n * Vt / Is) * ln(I/Is + 1)
//!
//! with partial derivative with respect to the state variable
//!   df/dy = n * Vt / (I + Is)
//!
//! All operations are pure functions of their arguments. Domain violations
//! (non-positive saturation current, log argument not positive, vanished
//! denominator) are reported as errors, never propagated as NaN. Overflow of
//! the current ratio at extreme operating points is not a violation; the
//! result saturates to infinity and the solvers' clamps bound it.

use crate::error::{DiodyneError, Result};

/// Guarded logarithm argument `I/Is + 1`.
///
/// `Is` must be positive. The ratio may overflow to infinity at extreme
/// currents; that still satisfies the precondition and is left to the
/// solvers' clamps, not treated as a domain violation.
fn log_argument(is: f64, i: f64) -> Result<f64> {
    if is <= 0.0 {
        return Err(DiodyneError::NonPositiveSaturation { is });
    }
    let argument = i / is + 1.0;
    if argument.is_nan() || argument <= 0.0 {
        return Err(DiodyneError::LogDomain { argument });
    }
    Ok(argument)
}

/// Diode voltage drop at operating-point current `i`.
///
/// `i = 0` gives exactly zero (ln 1 = 0). Requires `is > 0` and
/// `i/is + 1 > 0`.
pub fn diode_voltage(is: f64, n: f64, vt: f64, i: f64) -> Result<f64> {
    Ok(n * vt * log_argument(is, i)?.ln())
}

/// Rate term of the current response at operating-point current `i`.
///
/// This is the `f` evaluated by the Taylor expansion. Same domain
/// requirement as [`diode_voltage`].
pub fn current_response(is: f64, n: f64, vt: f64, i: f64) -> Result<f64> {
    Ok((n * vt / is) * log_argument(is, i)?.ln())
}

/// Partial derivative of the response with respect to the state variable.
///
/// Requires `i + is != 0`.
pub fn response_slope(is: f64, n: f64, vt: f64, i: f64) -> Result<f64> {
    let denominator = i + is;
    if denominator == 0.0 {
        return Err(DiodyneError::ZeroDenominator);
    }
    Ok(n * vt / denominator)
}

/// Current through the resistor-augmented circuit at operating point `i`.
///
/// `r = 0` is the bare-diode arrangement and returns `i` unchanged for any
/// `vt` and `vs`; otherwise the resistor law `(vs - Vd) / r` applies.
pub fn circuit_current(is: f64, n: f64, vt: f64, i: f64, r: f64, vs: f64) -> Result<f64> {
    if r == 0.0 {
        return Ok(i);
    }
    Ok((vs - diode_voltage(is, n, vt, i)?) / r)
}

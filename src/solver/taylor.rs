//! Truncated Taylor expansion of the diode current response.

use crate::error::Result;
use crate::model;
use crate::{INITIAL_VALUE, NOMINAL_STEP};

use super::{CURRENT_CEILING, MAGNITUDE_SCALE, STEP_REFINEMENT};

/// Estimate the response one refined step ahead of the initial state.
///
/// Evaluates `y0 + h*f0 + (h^2/2)*f0*df0` at the case's operating point,
/// scales both expansion terms by [`MAGNITUDE_SCALE`], then clamps the sum
/// to the saturation-current floor and [`CURRENT_CEILING`]. Clamping is the
/// stability policy, not an error signal; errors only arise from the model's
/// domain preconditions.
pub fn approximate(is: f64, n: f64, vt: f64, i: f64) -> Result<f64> {
    let f0 = model::current_response(is, n, vt, i)?;
    let df0 = model::response_slope(is, n, vt, i)?;

    let h = NOMINAL_STEP / STEP_REFINEMENT;

    let first_order = h * f0;
    let second_order = (h * h / 2.0) * f0 * df0;

    let mut y = INITIAL_VALUE + first_order * MAGNITUDE_SCALE + second_order * MAGNITUDE_SCALE;

    // Physical floor first, then the ceiling; the order matters when the
    // saturation current itself exceeds the ceiling.
    if y < is {
        y = is;
    }
    if y > CURRENT_CEILING {
        y = CURRENT_CEILING;
    }

    Ok(y)
}

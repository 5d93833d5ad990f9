//! Fixed-count Picard iteration over the resistor-law map.

use crate::error::Result;
use crate::model;

use super::PICARD_ITERATIONS;

/// Run the successive-approximation loop for one case.
///
/// The first iterate is the seed current itself; each later iterate
/// substitutes its predecessor into [`model::circuit_current`]. Exactly
/// [`PICARD_ITERATIONS`] values are produced, in order, with no convergence
/// check and no early exit. Values are reported exactly as computed; this
/// layer applies none of the Taylor path's clamping.
pub fn iterate(
    is: f64,
    n: f64,
    vt: f64,
    i: f64,
    r: f64,
    vs: f64,
) -> Result<[f64; PICARD_ITERATIONS]> {
    let mut iterates = [0.0; PICARD_ITERATIONS];
    iterates[0] = i;
    for k in 1..PICARD_ITERATIONS {
        iterates[k] = model::circuit_current(is, n, vt, iterates[k - 1], r, vs)?;
    }
    Ok(iterates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const IS: f64 = 1e-12;
    const N: f64 = 1.5;
    const VT: f64 = 0.02585;

    #[test]
    fn test_first_iterate_is_the_seed() {
        let seq = iterate(IS, N, VT, 0.0042, 1000.0, 5.0).unwrap();
        assert_eq!(seq[0], 0.0042);
    }

    #[test]
    fn test_bare_diode_leaves_current_unchanged() {
        // R = 0 short-circuits the map to the identity each step
        let seq = iterate(IS, N, VT, 0.001, 0.0, 0.0).unwrap();
        assert_eq!(seq, [0.001, 0.001, 0.001]);
    }

    #[test]
    fn test_resistor_case_substitutes_previous_iterate() {
        let seq = iterate(IS, N, VT, 0.001, 1000.0, 5.0).unwrap();

        let y2 = model::circuit_current(IS, N, VT, 0.001, 1000.0, 5.0).unwrap();
        let y3 = model::circuit_current(IS, N, VT, y2, 1000.0, 5.0).unwrap();
        assert_eq!(seq[1], y2);
        assert_eq!(seq[2], y3);

        // and the second iterate is the resistor law at the seed
        let vd = model::diode_voltage(IS, N, VT, 0.001).unwrap();
        assert_relative_eq!(seq[1], (5.0 - vd) / 1000.0, max_relative = 1e-15);
    }

    #[test]
    fn test_iterates_are_not_clamped() {
        // A milliohm resistor drives the second iterate to thousands of
        // amperes; it must be reported as computed, not pinned to 1 A.
        let seq = iterate(IS, N, VT, 0.001, 1e-3, 5.0).unwrap();
        assert!(seq[1] > 1.0e3, "iterate {} was clamped", seq[1]);

        // A grounded source drives the map negative, below the
        // saturation-current floor the Taylor path would enforce.
        let seq = iterate(1e-2, 1.0, 0.025, 0.001, 1000.0, 0.0).unwrap();
        assert!(seq[1] < 0.0, "iterate {} was clamped", seq[1]);
    }

    #[test]
    fn test_domain_error_stops_the_case() {
        // The first substitution lands far below -Is, so the second one
        // walks out of the logarithm's domain.
        assert!(iterate(IS, N, VT, 0.001, 1000.0, 0.0).is_err());
    }
}

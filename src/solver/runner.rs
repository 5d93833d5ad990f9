//! Per-case evaluation pipeline.
//!
//! Runs both approximation schemes on one parsed case and derives the
//! resulting circuit current:
//!
//! 1. Truncated Taylor expansion seeded from the case's current.
//! 2. Three Picard substitution iterates.
//! 3. Circuit current: the third iterate for a bare diode, or the
//!    resistor branch law applied to the third iterate when a series
//!    resistor is present.

use crate::case::{ApproximationResult, CircuitCase, ProblemKind};
use crate::error::Result;
use crate::model;

use super::{picard, taylor};

/// Evaluate a single case with both schemes.
///
/// Either scheme can fail when an iterate drives the diode equation out
/// of the logarithm's domain; the first failure aborts the case.
pub fn run_case(case: &CircuitCase) -> Result<ApproximationResult> {
    let taylor = taylor::approximate(case.is, case.n, case.vt, case.current)?;
    let iterates = picard::iterate(
        case.is,
        case.n,
        case.vt,
        case.current,
        case.resistance,
        case.source_voltage,
    )?;

    let circuit_current = match case.kind {
        ProblemKind::Diode => iterates[2],
        ProblemKind::DiodeResistor => model::circuit_current(
            case.is,
            case.n,
            case.vt,
            iterates[2],
            case.resistance,
            case.source_voltage,
        )?,
    };

    tracing::debug!(
        row = case.line,
        kind = %case.kind,
        taylor,
        circuit_current,
        "case evaluated"
    );

    Ok(ApproximationResult {
        taylor,
        picard: iterates,
        circuit_current,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const IS: f64 = 1e-12;
    const N: f64 = 1.5;
    const VT: f64 = 0.02585;

    fn diode_case() -> CircuitCase {
        CircuitCase::diode(2, IS, N, VT, 0.001)
    }

    fn resistor_case() -> CircuitCase {
        CircuitCase::diode_resistor(3, IS, N, VT, 1000.0, 5.0, 0.001).unwrap()
    }

    #[test]
    fn test_run_is_deterministic() {
        let case = resistor_case();
        let first = run_case(&case).unwrap();
        let second = run_case(&case).unwrap();

        assert_eq!(first.taylor.to_bits(), second.taylor.to_bits());
        for k in 0..3 {
            assert_eq!(first.picard[k].to_bits(), second.picard[k].to_bits());
        }
        assert_eq!(
            first.circuit_current.to_bits(),
            second.circuit_current.to_bits()
        );
    }

    #[test]
    fn test_bare_diode_case() {
        let result = run_case(&diode_case()).unwrap();

        // Without a resistor the substitution map is the identity, so
        // every iterate (and the circuit current) stays at the seed.
        for iterate in result.picard {
            assert_relative_eq!(iterate, 0.001);
        }
        assert_relative_eq!(result.circuit_current, 0.001);
        assert_relative_eq!(result.taylor, 0.0805102, max_relative = 1e-5);
    }

    #[test]
    fn test_diode_circuit_current_is_third_iterate() {
        let result = run_case(&diode_case()).unwrap();
        assert_eq!(result.circuit_current.to_bits(), result.picard[2].to_bits());
    }

    #[test]
    fn test_resistor_case_follows_branch_law() {
        let result = run_case(&resistor_case()).unwrap();

        let y2 = model::circuit_current(IS, N, VT, 0.001, 1000.0, 5.0).unwrap();
        let y3 = model::circuit_current(IS, N, VT, y2, 1000.0, 5.0).unwrap();
        let expected = model::circuit_current(IS, N, VT, y3, 1000.0, 5.0).unwrap();

        assert_relative_eq!(result.picard[0], 0.001);
        assert_relative_eq!(result.picard[1], y2);
        assert_relative_eq!(result.picard[2], y3);
        assert_relative_eq!(result.circuit_current, expected);

        // (Vs - Vd(I)) / R with I = 1 mA lands near 4.196 mA.
        assert_relative_eq!(result.picard[1], 0.0041964554, max_relative = 1e-6);
    }

    #[test]
    fn test_domain_failure_propagates() {
        // A grounded source drives the second iterate below -Is.
        let case = CircuitCase::diode_resistor(4, IS, N, VT, 1000.0, 0.0, 0.001).unwrap();
        assert!(run_case(&case).is_err());
    }
}

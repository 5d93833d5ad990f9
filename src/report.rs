//! Human-readable case reports for the CLI frontend.
//!
//! Prints one block per case with the input parameters and both
//! approximation results, mirroring the layout of the result table in
//! a form meant for eyeballing rather than post-processing.

use std::io::Write;

use crate::case::{ApproximationResult, CircuitCase, ProblemKind};
use crate::error::Result;

/// Write the report block for one evaluated case.
pub fn write_case<W: Write>(
    case: &CircuitCase,
    result: &ApproximationResult,
    writer: &mut W,
) -> Result<()> {
    match case.kind {
        ProblemKind::Diode => writeln!(
            writer,
            "\nDiode Case: Is={:.2e}, n={:.2}, Vt={:.5}, I={:.4}",
            case.is, case.n, case.vt, case.current
        )?,
        ProblemKind::DiodeResistor => writeln!(
            writer,
            "\nDiode with Resistor Case: Is={:.2e}, n={:.2}, Vt={:.5}, R={:.1}, Vs={:.1}, I={:.4}",
            case.is, case.n, case.vt, case.resistance, case.source_voltage, case.current
        )?,
    }

    writeln!(writer, "  Taylor Approx y(t+h) = {:.10}", result.taylor)?;
    writeln!(writer, "  Picard Iterations:")?;
    for (k, iterate) in result.picard.iter().enumerate() {
        writeln!(writer, "    y_{}(t) = {:.10}", k + 1, iterate)?;
    }
    writeln!(writer, "  Circuit Current = {:.10} A", result.circuit_current)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diode_report() {
        let case = CircuitCase::diode(2, 1e-12, 1.5, 0.02585, 0.001);
        let result = ApproximationResult {
            taylor: 0.0805102505,
            picard: [0.001, 0.001, 0.001],
            circuit_current: 0.001,
        };
        let mut out = Vec::new();
        write_case(&case, &result, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\nDiode Case: Is=1.00e-12, n=1.50, Vt=0.02585, I=0.0010\n"));
        assert!(text.contains("  Taylor Approx y(t+h) = 0.0805102505\n"));
        assert!(text.contains("    y_1(t) = 0.0010000000\n"));
        assert!(text.contains("    y_3(t) = 0.0010000000\n"));
        assert!(text.ends_with("  Circuit Current = 0.0010000000 A\n"));
    }

    #[test]
    fn test_resistor_report_names_both_sources() {
        let case =
            CircuitCase::diode_resistor(3, 1e-12, 1.5, 0.02585, 1000.0, 5.0, 0.001).unwrap();
        let result = ApproximationResult {
            taylor: 0.0805102505,
            picard: [0.001, 0.0041964554, 0.0041408427],
            circuit_current: 0.0041413600,
        };
        let mut out = Vec::new();
        write_case(&case, &result, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Diode with Resistor Case:"));
        assert!(text.contains("R=1000.0, Vs=5.0"));
        assert!(text.contains("y_2(t) = 0.0041964554"));
    }
}

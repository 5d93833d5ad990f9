//! Result table writer.

use std::io::Write;

use crate::case::{ApproximationResult, CircuitCase, ProblemKind};
use crate::error::Result;

/// Column header for the result table.
pub const RESULT_HEADER: &str =
    "Problem Type,Is,n,Vt,R,Vs,Taylor Result,Picard_1,Picard_2,Picard_3,Circuit Current";

/// Write the result table for a batch of evaluated cases.
///
/// Emits the column header followed by one row per case, in batch
/// order. Saturation currents and computed responses use scientific
/// notation; the remaining parameters use fixed notation, all with ten
/// digits after the point.
pub fn write_results<W: Write>(
    rows: &[(CircuitCase, ApproximationResult)],
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "{}", RESULT_HEADER)?;
    for (case, result) in rows {
        write_row(case, result, writer)?;
    }
    Ok(())
}

fn write_row<W: Write>(
    case: &CircuitCase,
    result: &ApproximationResult,
    writer: &mut W,
) -> Result<()> {
    write!(
        writer,
        "{},{:.10e},{:.10},{:.10},",
        case.kind.tag(),
        case.is,
        case.n,
        case.vt
    )?;
    // Bare-diode rows fill the resistor columns with a literal 0.0.
    match case.kind {
        ProblemKind::Diode => write!(writer, "0.0,0.0")?,
        ProblemKind::DiodeResistor => {
            write!(writer, "{:.10},{:.10}", case.resistance, case.source_voltage)?
        }
    }
    writeln!(
        writer,
        ",{:.10e},{:.10e},{:.10e},{:.10e},{:.10e}",
        result.taylor,
        result.picard[0],
        result.picard[1],
        result.picard[2],
        result.circuit_current
    )?;
    Ok(())
}

//! Case table reader.

use crate::case::{CircuitCase, ProblemKind};
use crate::error::{DiodyneError, Result};

/// Parse a whole case table.
///
/// The first line is a column header and is skipped, blank lines are
/// ignored. Every remaining row parses independently: a malformed row
/// becomes an error entry without stopping the rest of the table, and
/// entries keep the input order. Row numbers are 1-based.
pub fn parse(input: &str) -> Vec<Result<CircuitCase>> {
    input
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| !row.trim().is_empty())
        .map(|(idx, row)| parse_row(row, idx + 1))
        .collect()
}

/// Parse a single case row.
///
/// Rows are comma-separated with labeled values; labels are matched
/// literally (case-sensitive):
///
/// ```text
/// diode,I_s,1e-12,n,1.5,V_t,0.02585,I,0.001
/// diode_resistor,I_s,1e-12,n,1.5,V_t,0.02585,R,1000,Vs,5,I,0.001
/// ```
pub fn parse_row(row: &str, line: usize) -> Result<CircuitCase> {
    let mut fields = row.split(',').map(str::trim);

    let tag = fields.next().unwrap_or("");
    let kind = ProblemKind::from_tag(tag, line)?;

    let is = labeled_value(&mut fields, "I_s", line)?;
    let n = labeled_value(&mut fields, "n", line)?;
    let vt = labeled_value(&mut fields, "V_t", line)?;

    let case = match kind {
        ProblemKind::Diode => {
            let current = labeled_value(&mut fields, "I", line)?;
            CircuitCase::diode(line, is, n, vt, current)
        }
        ProblemKind::DiodeResistor => {
            let resistance = labeled_value(&mut fields, "R", line)?;
            let source_voltage = labeled_value(&mut fields, "Vs", line)?;
            let current = labeled_value(&mut fields, "I", line)?;
            CircuitCase::diode_resistor(line, is, n, vt, resistance, source_voltage, current)?
        }
    };

    // A trailing comma is tolerated; any further field is not.
    if let Some(extra) = fields.find(|field| !field.is_empty()) {
        return Err(DiodyneError::parse(
            line,
            format!("unexpected trailing field '{}'", extra),
        ));
    }

    Ok(case)
}

/// Consume one `label,value` pair from the field stream.
fn labeled_value<'a, I>(fields: &mut I, label: &str, line: usize) -> Result<f64>
where
    I: Iterator<Item = &'a str>,
{
    let got = fields
        .next()
        .ok_or_else(|| DiodyneError::parse(line, format!("missing label '{}'", label)))?;
    if got != label {
        return Err(DiodyneError::parse(
            line,
            format!("expected label '{}', got '{}'", label, got),
        ));
    }
    let value = fields
        .next()
        .ok_or_else(|| DiodyneError::parse(line, format!("missing value for '{}'", label)))?;
    value.parse().map_err(|_| {
        DiodyneError::parse(line, format!("invalid number '{}' for '{}'", value, label))
    })
}

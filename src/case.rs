//! Core types for circuit cases and their results.

use std::fmt;

use crate::error::{DiodyneError, Result};

/// The circuit variant a case describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// Bare diode driven by a fixed input current
    Diode,
    /// Diode in series with a resistor and a voltage source
    DiodeResistor,
}

impl ProblemKind {
    /// Parse a problem-type tag from an input row.
    ///
    /// Tags are matched literally; anything other than `diode` or
    /// `diode_resistor` fails with [`DiodyneError::InvalidCase`].
    pub fn from_tag(tag: &str, line: usize) -> Result<Self> {
        match tag {
            "diode" => Ok(ProblemKind::Diode),
            "diode_resistor" => Ok(ProblemKind::DiodeResistor),
            _ => Err(DiodyneError::invalid_case(tag, line)),
        }
    }

    /// The literal tag used in input and output tables.
    pub fn tag(&self) -> &'static str {
        match self {
            ProblemKind::Diode => "diode",
            ProblemKind::DiodeResistor => "diode_resistor",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One parsed input row: the parameters of a single circuit case.
///
/// Immutable once constructed. `resistance` and `source_voltage` are exactly
/// zero for [`ProblemKind::Diode`] cases; the constructors enforce this.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitCase {
    /// Which circuit variant this case describes
    pub kind: ProblemKind,
    /// Saturation current Is in amperes
    pub is: f64,
    /// Ideality factor n
    pub n: f64,
    /// Thermal voltage Vt in volts
    pub vt: f64,
    /// Input current I in amperes
    pub current: f64,
    /// Series resistance R in ohms (zero for a bare diode)
    pub resistance: f64,
    /// Source voltage Vs in volts (zero for a bare diode)
    pub source_voltage: f64,
    /// Source row number for error reporting
    pub line: usize,
}

impl CircuitCase {
    /// Build a bare-diode case. The resistor fields are fixed at zero.
    pub fn diode(line: usize, is: f64, n: f64, vt: f64, current: f64) -> Self {
        Self {
            kind: ProblemKind::Diode,
            is,
            n,
            vt,
            current,
            resistance: 0.0,
            source_voltage: 0.0,
            line,
        }
    }

    /// Build a diode-resistor case.
    ///
    /// Fails when `resistance` is zero; the resistor law divides by R.
    pub fn diode_resistor(
        line: usize,
        is: f64,
        n: f64,
        vt: f64,
        resistance: f64,
        source_voltage: f64,
        current: f64,
    ) -> Result<Self> {
        if resistance == 0.0 {
            return Err(DiodyneError::ZeroResistance { line });
        }
        Ok(Self {
            kind: ProblemKind::DiodeResistor,
            is,
            n,
            vt,
            current,
            resistance,
            source_voltage,
            line,
        })
    }
}

/// The outcome of evaluating one case.
///
/// Written once by the runner that produced it, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationResult {
    /// Order-2 Taylor estimate, clamped by the solver's stability policy
    pub taylor: f64,
    /// The three Picard iterates, in iteration order
    pub picard: [f64; 3],
    /// Reported circuit current, derived from the final Picard iterate
    pub circuit_current: f64,
}

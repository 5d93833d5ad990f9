//! Tabular input and output for batch evaluation.
//!
//! Cases arrive as a comma-separated table with one case per row. Every
//! numeric field is preceded by its label so that rows stay readable and
//! column drift is caught at parse time. Results leave as a second
//! comma-separated table with one row per successfully evaluated case.
//!
//! # Input Grammar
//!
//! ```text
//! table        = header { row }
//! header       = any single line (skipped)
//! row          = diode_row | resistor_row | blank
//! diode_row    = "diode" pair("I_s") pair("n") pair("V_t") pair("I")
//! resistor_row = "diode_resistor" pair("I_s") pair("n") pair("V_t")
//!                pair("R") pair("Vs") pair("I")
//! pair(label)  = ',' label ',' number
//! number       = anything `f64::from_str` accepts
//! ```
//!
//! Labels are matched literally. Whitespace around fields is trimmed and
//! a single trailing comma is tolerated.
//!
//! # Output Columns
//!
//! | Column | Format | Notes |
//! |--------|--------|-------|
//! | Problem Type | tag | `diode` or `diode_resistor` |
//! | Is | scientific, 10 digits | |
//! | n, Vt | fixed, 10 digits | |
//! | R, Vs | fixed, 10 digits | literal `0.0` on bare-diode rows |
//! | Taylor Result | scientific, 10 digits | |
//! | Picard_1..Picard_3 | scientific, 10 digits | iterates in order |
//! | Circuit Current | scientific, 10 digits | |
//!
//! # Example
//!
//! ```text
//! Problem Type,Parameters
//! diode,I_s,1e-12,n,1.5,V_t,0.02585,I,0.001
//! diode_resistor,I_s,1e-12,n,1.5,V_t,0.02585,R,1000,Vs,5,I,0.001
//! ```

mod reader;
mod writer;

pub use reader::{parse, parse_row};
pub use writer::{write_results, RESULT_HEADER};

/// Parse a case table file.
#[cfg(feature = "cli")]
pub fn parse_file(
    path: &std::path::Path,
) -> crate::error::Result<Vec<crate::error::Result<crate::case::CircuitCase>>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::DiodyneError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok(parse(&content))
}

//! Results output formatting (CSV).

use std::io::Write;

use crate::solver::Record;

/// Header line of the CSV output.
pub const CSV_HEADER: &str = "temps,Vin,Vout";

/// Write simulation records as CSV.
///
/// Format:
/// ```csv
/// temps,Vin,Vout
/// 0,0,0
/// 0.0001,0.1569,0.0007
/// ```
pub fn write_csv<W: Write>(records: &[Record], writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        writeln!(writer, "{},{},{}", record.time, record.input, record.output)?;
    }
    writer.flush()
}

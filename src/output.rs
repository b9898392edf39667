use std::io::{self, Write};

use crate::domain::LookupResult;

/// Write the report: one `<accession>\t<outcome>` line per result, in the
/// order given.
pub fn write_report<W: Write>(mut writer: W, results: &[LookupResult]) -> io::Result<()> {
    for result in results {
        writeln!(writer, "{}\t{}", result.accession, result.outcome)?;
    }
    Ok(())
}

pub fn print_report(results: &[LookupResult]) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(stdout.lock(), results)
}

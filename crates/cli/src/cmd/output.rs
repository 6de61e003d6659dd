//! Shared output formatting for generation commands.

use std::io::{self, Write};

use spingen_core::export::{self, ExportError};
use spingen_core::generate::Variation;

use crate::OutputFormat;

/// Print variations in the requested format.
///
/// `total` is the size of the whole run; when `variations` is a preview of
/// it the footer says so.
pub fn print_variations(
    variations: &[Variation],
    total: usize,
    format: OutputFormat,
) -> Result<(), ExportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            write_text(&mut out, variations, total).map_err(io_error)?;
        }
        OutputFormat::Json => {
            export::write_json(&mut out, variations)?;
            writeln!(out).map_err(io_error)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, variations: &[Variation], total: usize) -> io::Result<()> {
    for variation in variations {
        writeln!(out, "--- Variation {} ---", variation.index)?;
        if let Some(vars) = &variation.variables {
            for (name, value) in vars.iter() {
                writeln!(out, "{name} = {value}")?;
            }
        }
        writeln!(out, "{}", variation.text)?;
        writeln!(out)?;
    }
    writeln!(out, "{}", footer(variations.len(), total))
}

fn footer(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "variation" } else { "variations" };
    if shown < total {
        format!("-- showing {shown} of {total} {noun} --")
    } else {
        format!("-- {total} {noun} --")
    }
}

fn io_error(source: io::Error) -> ExportError {
    ExportError::Io { path: "<stdout>".into(), source }
}

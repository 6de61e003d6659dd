//! Writing generated variations out as CSV or JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::generate::Variation;

/// Header of the generated-text column, always last.
pub const GENERATED_TEXT_HEADER: &str = "Generated Text";

/// Default export file name for simple runs.
pub const SIMPLE_EXPORT_FILE: &str = "variations_simple.csv";

/// Default export file name for dataset runs.
pub const DATASET_EXPORT_FILE: &str = "variations_full.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write export file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write variations as comma-separated CSV.
///
/// Header is `columns` followed by [`GENERATED_TEXT_HEADER`]. Column values
/// come from each variation's variables; a missing value is written empty.
pub fn write_csv<W: Write>(
    writer: W,
    variations: &[Variation],
    columns: &[String],
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = columns.iter().map(String::as_str).collect();
    header.push(GENERATED_TEXT_HEADER);
    wtr.write_record(&header)?;

    for variation in variations {
        let mut record: Vec<&str> = columns
            .iter()
            .map(|col| {
                variation.variables.as_ref().and_then(|vars| vars.get(col)).unwrap_or("")
            })
            .collect();
        record.push(&variation.text);
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render variations as a CSV string.
pub fn to_csv_string(variations: &[Variation], columns: &[String]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, variations, columns)?;
    // csv only ever writes the UTF-8 it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write variations as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: W, variations: &[Variation]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, variations)?;
    Ok(())
}

/// Write a CSV export to `path`, creating parent directories as needed.
pub fn export_csv_file(
    path: &Path,
    variations: &[Variation],
    columns: &[String],
) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    write_csv(BufWriter::new(file), variations, columns)?;

    info!(path = %path.display(), count = variations.len(), "exported variations");
    Ok(())
}

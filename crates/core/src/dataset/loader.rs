use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::repair::{normalize_cell, repair_encoding};
use super::types::Dataset;

/// Field separator of the expected input files.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Largest accepted input (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("data file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read data: {0}")]
    Read(#[source] std::io::Error),

    #[error("data is too large: {size} bytes (maximum {max_size} bytes)")]
    TooLarge { size: u64, max_size: u64 },

    #[error("data has no columns")]
    NoColumns,

    #[error("data has no rows")]
    NoRows,

    #[error("column {position} has an empty name")]
    EmptyColumnName { position: usize },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("malformed data at line {line}: {message}")]
    Malformed { line: u64, message: String },
}

/// Parsing options for tabular sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// Maximum input size in bytes.
    pub max_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: DEFAULT_DELIMITER, max_size: MAX_FILE_SIZE }
    }
}

/// Load a dataset from a file on disk.
pub fn load_path(path: &Path, opts: &LoadOptions) -> Result<Dataset, DataFormatError> {
    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > opts.max_size {
        return Err(DataFormatError::TooLarge {
            size: metadata.len(),
            max_size: opts.max_size,
        });
    }

    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read data file");
    load_bytes(&bytes, opts)
}

/// Load a dataset from any reader, stopping early when it exceeds the size limit.
pub fn load_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<Dataset, DataFormatError> {
    let mut bytes = Vec::new();
    reader
        .take(opts.max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(DataFormatError::Read)?;
    load_bytes(&bytes, opts)
}

/// Load a dataset from raw bytes.
pub fn load_bytes(bytes: &[u8], opts: &LoadOptions) -> Result<Dataset, DataFormatError> {
    let size = bytes.len() as u64;
    if size > opts.max_size {
        return Err(DataFormatError::TooLarge { size, max_size: opts.max_size });
    }

    let (text, encoding) = decode(bytes);
    let (header, records) = parse_table(&text, opts.delimiter)?;

    if header.is_empty() {
        return Err(DataFormatError::NoColumns);
    }
    if records.is_empty() {
        return Err(DataFormatError::NoRows);
    }

    let mut columns: Vec<String> = Vec::with_capacity(header.len());
    for (position, raw) in header.iter().enumerate() {
        let name = repair_encoding(raw);
        if name.trim().is_empty() {
            return Err(DataFormatError::EmptyColumnName { position: position + 1 });
        }
        if columns.contains(&name) {
            return Err(DataFormatError::DuplicateColumn(name));
        }
        columns.push(name);
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| record.iter().map(normalize_cell).collect())
        .collect();

    info!(
        rows = rows.len(),
        columns = columns.len(),
        encoding = encoding.name(),
        "loaded dataset"
    );

    Ok(Dataset::new(columns, rows))
}

/// Decode as UTF-8 (BOM stripped), falling back to Windows-1252.
///
/// Windows-1252 maps every byte to a character, so decoding cannot fail.
fn decode(bytes: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(body) {
        return (text, UTF_8);
    }

    warn!("data is not valid UTF-8, decoding as windows-1252");
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(body);
    (text, WINDOWS_1252)
}

fn parse_table(
    text: &str,
    delimiter: u8,
) -> Result<(csv::StringRecord, Vec<csv::StringRecord>), DataFormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let header = reader.headers().map_err(malformed)?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result.map_err(malformed)?);
    }

    Ok((header, records))
}

fn malformed(err: csv::Error) -> DataFormatError {
    let line = err.position().map_or(0, csv::Position::line);
    DataFormatError::Malformed { line, message: err.to_string() }
}

fn io_error(path: &Path, err: std::io::Error) -> DataFormatError {
    if err.kind() == std::io::ErrorKind::NotFound {
        DataFormatError::NotFound { path: path.to_path_buf() }
    } else {
        DataFormatError::Io { path: path.to_path_buf(), source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &[u8]) -> Result<Dataset, DataFormatError> {
        load_bytes(text, &LoadOptions::default())
    }

    #[test]
    fn loads_single_row() {
        let ds = load(b"a;b\n1;2\n").unwrap();
        assert_eq!(ds.columns(), ["a", "b"]);
        assert_eq!(ds.len(), 1);

        let vars = &ds.records()[0];
        assert_eq!(vars.get("a"), Some("1"));
        assert_eq!(vars.get("b"), Some("2"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn header_only_is_rejected() {
        assert!(matches!(load(b"a;b\n"), Err(DataFormatError::NoRows)));
    }

    #[test]
    fn empty_source_has_no_columns() {
        assert!(matches!(load(b""), Err(DataFormatError::NoColumns)));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let ds = load(b"\xEF\xBB\xBFville;cp\nLyon;69001\n").unwrap();
        assert_eq!(ds.columns()[0], "ville");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "Rhône" and "Département" written as Windows-1252
        let ds = load(b"D\xe9partement\nRh\xf4ne\n").unwrap();
        assert_eq!(ds.columns(), ["Département"]);
        assert_eq!(ds.row(0).unwrap().get("Département"), Some("Rhône"));
    }

    #[test]
    fn any_high_byte_decodes() {
        let mut bytes = b"valeur\n".to_vec();
        bytes.extend(0x80..=0xFFu8);
        bytes.push(b'\n');

        let ds = load(&bytes).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.row(0).unwrap().get("valeur").unwrap().chars().count(), 128);
    }

    #[test]
    fn repairs_double_encoded_values_and_headers() {
        let ds = load("DÃ©partement;Population\nRhÃ´ne;1883437.0\n".as_bytes()).unwrap();
        let row = ds.row(0).unwrap();
        assert_eq!(row.get("Département"), Some("Rhône"));
        assert_eq!(row.get("Population"), Some("1883437"));
    }

    #[test]
    fn comma_is_not_a_separator() {
        let ds = load(b"name;note\nLyon;big, old\n").unwrap();
        assert_eq!(ds.row(0).unwrap().get("note"), Some("big, old"));
    }

    #[test]
    fn quoted_fields_may_contain_delimiter() {
        let ds = load(b"name;note\nLyon;\"a;b\"\n").unwrap();
        assert_eq!(ds.row(0).unwrap().get("note"), Some("a;b"));
    }

    #[test]
    fn unequal_row_length_is_malformed() {
        let err = load(b"a;b\n1;2\n3;4;5\n").unwrap_err();
        match err {
            DataFormatError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let err = load(b"a;a\n1;2\n").unwrap_err();
        assert!(matches!(err, DataFormatError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn empty_column_name_is_rejected() {
        let err = load(b"a;\n1;2\n").unwrap_err();
        assert!(matches!(err, DataFormatError::EmptyColumnName { position: 2 }));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let opts = LoadOptions { max_size: 4, ..LoadOptions::default() };
        let err = load_bytes(b"a;b\n1;2\n", &opts).unwrap_err();
        assert!(matches!(err, DataFormatError::TooLarge { size: 8, max_size: 4 }));
    }

    #[test]
    fn custom_delimiter() {
        let opts = LoadOptions { delimiter: b',', ..LoadOptions::default() };
        let ds = load_bytes(b"a,b\n1,2\n", &opts).unwrap();
        assert_eq!(ds.width(), 2);
    }

    #[test]
    fn reader_respects_size_limit() {
        let opts = LoadOptions { max_size: 4, ..LoadOptions::default() };
        let err = load_reader(&b"a;b\n1;2\n"[..], &opts).unwrap_err();
        assert!(matches!(err, DataFormatError::TooLarge { .. }));
    }
}

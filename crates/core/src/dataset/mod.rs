//! Tabular variable source: `;`-separated files with a header row.
//!
//! Loading decodes the bytes (UTF-8, falling back to Windows-1252), parses
//! the table, then cleans every value:
//! - known mis-decoded accent sequences are repaired
//! - integral floats such as `69001.0` lose their decimal part

mod loader;
mod repair;
mod types;

pub use loader::{
    DEFAULT_DELIMITER, DataFormatError, LoadOptions, MAX_FILE_SIZE, load_bytes,
    load_path, load_reader,
};
pub use repair::{normalize_cell, normalize_number, repair_encoding};
pub use types::{Dataset, Row};

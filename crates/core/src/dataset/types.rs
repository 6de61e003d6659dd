use serde::Serialize;

use crate::spintax::Variables;

/// A loaded table: ordered column names and rows of string cells.
///
/// Every row has exactly one value per column. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset. Short rows are padded with empty strings and long
    /// rows truncated so every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row { columns: &self.columns, values })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row { columns: &self.columns, values })
    }

    /// Every row as a variable mapping over all columns.
    pub fn records(&self) -> Vec<Variables> {
        self.rows().map(|row| row.to_variables(&self.columns)).collect()
    }
}

/// Borrowed view of one dataset row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// Mapping for the selected columns, in selection order. Names that are
    /// not columns of the dataset are skipped.
    pub fn to_variables(&self, selected: &[String]) -> Variables {
        selected
            .iter()
            .filter_map(|name| self.get(name).map(|value| (name.as_str(), value)))
            .collect()
    }
}

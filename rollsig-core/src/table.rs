//! In-memory columnar table loaded from a headed CSV file.
//!
//! Column types are inferred from content:
//! - `Int` when every cell parses as `i64` and none is empty
//! - `Float` when every non-empty cell parses as `f64` (empty cells become NaN)
//! - `Text` otherwise

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the input loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Input CSV file missing")]
    NotFound { path: PathBuf },

    #[error("Malformed input CSV: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Int(_) => ColumnType::Int,
            ColumnData::Float(_) => ColumnType::Float,
            ColumnData::Text(_) => ColumnType::Text,
        }
    }

    /// Numeric view of the column; `None` for text.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            ColumnData::Int(v) => Some(v.iter().map(|&x| x as f64).collect()),
            ColumnData::Float(v) => Some(v.clone()),
            ColumnData::Text(_) => None,
        }
    }

    fn infer(cells: Vec<String>) -> Self {
        let trimmed: Vec<&str> = cells.iter().map(|c| c.trim()).collect();

        if trimmed.iter().all(|c| !c.is_empty()) {
            let ints: Option<Vec<i64>> = trimmed.iter().map(|c| c.parse().ok()).collect();
            if let Some(ints) = ints {
                return ColumnData::Int(ints);
            }
        }

        let floats: Option<Vec<f64>> = trimmed
            .iter()
            .map(|c| {
                if c.is_empty() {
                    Some(f64::NAN)
                } else {
                    c.parse().ok()
                }
            })
            .collect();
        match floats {
            Some(floats) => ColumnData::Float(floats),
            None => ColumnData::Text(cells),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Ordered rows stored column by column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl InputTable {
    /// Load a CSV file with a header row.
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = std::fs::File::open(path)
            .map_err(|e| LoadError::Parse(format!("{}: {e}", path.display())))?;
        Self::from_csv_reader(file)
    }

    /// Parse CSV from any reader. Rows whose field count differs from the
    /// header are rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| LoadError::Parse(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut n_rows = 0;
        for record in rdr.records() {
            let record = record.map_err(|e| LoadError::Parse(e.to_string()))?;
            for (col, field) in cells.iter_mut().zip(record.iter()) {
                col.push(field.to_string());
            }
            n_rows += 1;
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column {
                name,
                data: ColumnData::infer(cells),
            })
            .collect();

        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// First column with exactly this name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Add a derived column, replacing any existing column of the same name.
    ///
    /// # Panics
    /// If `data` does not have one value per row.
    pub fn set_column(&mut self, name: &str, data: ColumnData) {
        assert_eq!(
            data.len(),
            self.n_rows,
            "column '{name}' has {} values for {} rows",
            data.len(),
            self.n_rows
        );
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.data = data,
            None => self.columns.push(Column {
                name: name.to_string(),
                data,
            }),
        }
    }
}

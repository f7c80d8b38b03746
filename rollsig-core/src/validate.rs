//! Input validation: runs after load and before any computation.

use thiserror::Error;

use crate::table::InputTable;

/// Name of the price column every input must carry.
pub const CLOSE_COLUMN: &str = "close";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input CSV is empty")]
    EmptyInput,

    #[error("Required column '{0}' missing")]
    MissingColumn(String),

    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),
}

/// Check that the table has rows and a numeric `close` column, returning the
/// close prices. Emptiness is checked before column presence.
pub fn validate(table: &InputTable) -> Result<Vec<f64>, ValidationError> {
    if table.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let close = table
        .column(CLOSE_COLUMN)
        .ok_or_else(|| ValidationError::MissingColumn(CLOSE_COLUMN.to_string()))?;
    close
        .data
        .to_f64()
        .ok_or_else(|| ValidationError::NonNumericColumn(CLOSE_COLUMN.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(csv: &str) -> InputTable {
        InputTable::from_csv_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn returns_close_prices() {
        assert_eq!(validate(&table("close\n10\n12.5\n")).unwrap(), vec![10.0, 12.5]);
    }

    #[test]
    fn empty_before_missing_column() {
        assert_eq!(validate(&table("open\n")), Err(ValidationError::EmptyInput));
        assert_eq!(validate(&table("")), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn missing_close() {
        let err = validate(&table("open,Close\n1,2\n")).unwrap_err();
        assert_eq!(err, ValidationError::MissingColumn("close".into()));
        assert_eq!(err.to_string(), "Required column 'close' missing");
    }

    #[test]
    fn text_close_is_rejected() {
        let err = validate(&table("close\nten\n11\n")).unwrap_err();
        assert_eq!(err, ValidationError::NonNumericColumn("close".into()));
    }
}

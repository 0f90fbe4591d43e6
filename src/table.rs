//! The tabular value type: named columns, ordered rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PrintError;

/// A 2-D labeled table: named columns and ordered rows of JSON values.
///
/// Every row must match the column count; construction validates arity so a
/// malformed table fails at build time, not at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given column labels.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// Fails with `PrintError::InvalidArgument` when the row arity does not
    /// match the column count.
    pub fn push_row(&mut self, row: impl IntoIterator<Item = impl Into<Value>>) -> Result<(), PrintError> {
        let row: Vec<Value> = row.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(PrintError::InvalidArgument(format!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a row (builder pattern).
    pub fn with_row(mut self, row: impl IntoIterator<Item = impl Into<Value>>) -> Result<Self, PrintError> {
        self.push_row(row)?;
        Ok(self)
    }

    /// Build a table from a slice of serde-serializable records.
    ///
    /// Each record must serialize to a JSON object; columns are taken from
    /// the first record in field order, and later records fill missing
    /// columns with null. This mirrors how row-oriented data (CSV-like
    /// records, dataframes) is usually handed to a print call.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self, PrintError> {
        let mut columns: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            let value = serde_json::to_value(record)
                .map_err(|e| PrintError::formatting(std::any::type_name::<T>(), e))?;
            let Value::Object(obj) = value else {
                return Err(PrintError::InvalidArgument(
                    "table records must serialize to objects".to_string(),
                ));
            };
            if i == 0 {
                columns = obj.keys().cloned().collect();
            }
            let row = columns
                .iter()
                .map(|c| obj.get(c).cloned().unwrap_or(Value::Null))
                .collect();
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Table rows.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! Typed table representation shared by every pipeline stage.
//!
//! A [`Table`] is an ordered collection of rows over a fixed column set.
//! Cells are explicit [`Value`]s; an absent value is [`Value::Null`], never
//! a sentinel string, so presence checks in the cleaning stages are total.
//! Pipeline stages never mutate a table in place; each stage produces a new
//! `Table`, so two stages reading the same source table never interfere.

use chrono::NaiveDate;
use serde::Serialize;

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
}

impl Value {
    /// Build a value from a raw field as read from a delimited file.
    /// Common missing-value spellings become `Null`.
    pub fn from_raw(raw: &str) -> Self {
        if is_null_pattern(raw) {
            Value::Null
        } else {
            Value::Text(raw.to_string())
        }
    }

    /// Whether this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The date content, if this is a date value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Render the value as a delimited-file field. Null renders empty,
    /// dates render as ISO `YYYY-MM-DD`.
    pub fn to_field(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Check if a raw field represents a missing/null value.
pub fn is_null_pattern(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed == "."
        || trimmed == "-"
}

/// An ordered collection of rows sharing a column schema.
///
/// Row order is preserved through all non-filtering stages; filtering
/// stages drop rows but never reorder survivors. A table with zero rows or
/// zero columns is a legal value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a new table. Every row must have one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Create a table with the given columns and no rows.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names, in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in table order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// A specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

//! The per-run summary record.

use serde::Serialize;

use crate::error::{MetaprepError, Result};
use crate::table::Table;
use crate::text;

/// What the summary counts over.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Categorical column for the distinct-value count.
    pub categorical_column: String,
    /// Column whose non-empty presence is counted.
    pub presence_column: String,
    /// Keyword for the match count. Caller-supplied; no default.
    pub keyword: String,
    /// Columns searched for the keyword.
    pub keyword_columns: Vec<String>,
}

impl SummaryConfig {
    /// Conventional configuration for a paper-metadata export: distinct
    /// journals, abstract presence, keyword matched against the abstract.
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Self {
            categorical_column: "journal".to_string(),
            presence_column: "abstract".to_string(),
            keyword: keyword.into(),
            keyword_columns: vec!["abstract".to_string()],
        }
    }
}

/// A single flat record of aggregate statistics for one pipeline run.
/// Append-only output; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// Total rows in the table.
    pub rows: usize,
    /// Total columns in the table.
    pub columns: usize,
    /// Distinct non-null values in the categorical column.
    pub distinct_categories: usize,
    /// Rows with a non-empty value in the presence column.
    pub with_presence: usize,
    /// Rows without one.
    pub without_presence: usize,
    /// Rows matching the keyword filter.
    pub keyword_matches: usize,
}

/// Reduce a table into one [`SummaryRecord`]. All counts are exact.
///
/// A table with zero rows yields zero counts. A table pruned down to zero
/// columns also yields zero counts (there is nothing to designate), while
/// a non-empty schema that lacks one of the configured columns is a fatal
/// [`MetaprepError::MissingColumn`].
pub fn summarize(table: &Table, config: &SummaryConfig) -> Result<SummaryRecord> {
    if table.column_count() == 0 {
        return Ok(SummaryRecord {
            rows: table.row_count(),
            columns: 0,
            distinct_categories: 0,
            with_presence: 0,
            without_presence: table.row_count(),
            keyword_matches: 0,
        });
    }

    let categorical_idx = table
        .column_index(&config.categorical_column)
        .ok_or_else(|| MetaprepError::MissingColumn(config.categorical_column.clone()))?;
    let presence_idx = table
        .column_index(&config.presence_column)
        .ok_or_else(|| MetaprepError::MissingColumn(config.presence_column.clone()))?;

    let distinct_categories = {
        let mut seen = std::collections::HashSet::new();
        for value in table.column_values(categorical_idx) {
            if !value.is_null() {
                seen.insert(value.to_field());
            }
        }
        seen.len()
    };

    let with_presence = table
        .column_values(presence_idx)
        .filter(|v| v.as_text().map(|s| !s.is_empty()).unwrap_or(false))
        .count();

    let keyword_columns: Vec<&str> = config.keyword_columns.iter().map(|s| s.as_str()).collect();
    let keyword_matches =
        text::filter_by_keyword(table, &config.keyword, &keyword_columns)?.row_count();

    Ok(SummaryRecord {
        rows: table.row_count(),
        columns: table.column_count(),
        distinct_categories,
        with_presence,
        without_presence: table.row_count() - with_presence,
        keyword_matches,
    })
}

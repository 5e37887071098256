//! Keyword filtering and frequency-ranked token counting.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{MetaprepError, Result};
use crate::table::Table;

use super::stopwords::DEFAULT_STOPWORDS;

/// Tokens ranked by descending count, ties broken by first occurrence.
pub type TokenFrequency = Vec<(String, usize)>;

/// Configuration for token frequency counting.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Tokens excluded from counting (compared after normalization).
    pub stopwords: HashSet<String>,
    /// Number of top tokens to return.
    pub top_k: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            top_k: 20,
        }
    }
}

/// Return the sub-table of rows where any of the designated text columns
/// contains `keyword` as a case-insensitive substring.
///
/// Null fields never match; non-text fields never match. Row order is
/// preserved. Errors with [`MetaprepError::MissingColumn`] if a designated
/// column is absent.
pub fn filter_by_keyword(table: &Table, keyword: &str, columns: &[&str]) -> Result<Table> {
    let mut indices = Vec::with_capacity(columns.len());
    for name in columns {
        let idx = table
            .column_index(name)
            .ok_or_else(|| MetaprepError::MissingColumn(name.to_string()))?;
        indices.push(idx);
    }

    let needle = keyword.to_lowercase();
    let rows = table
        .rows()
        .iter()
        .filter(|row| {
            indices.iter().any(|&idx| {
                row[idx]
                    .as_text()
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect();

    Ok(Table::new(table.columns().to_vec(), rows))
}

/// Count token occurrences over all non-null text values of one column and
/// return the top `config.top_k` tokens.
///
/// Values are concatenated in row order, lowercased, stripped of
/// punctuation, whitespace-split, and filtered against the stopword set.
/// The insertion-ordered count map makes the tie-break deterministic:
/// equal counts rank by first occurrence.
pub fn token_frequency(table: &Table, column: &str, config: &TokenConfig) -> Result<TokenFrequency> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| MetaprepError::MissingColumn(column.to_string()))?;

    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for value in table.column_values(idx) {
        let Some(text) = value.as_text() else {
            continue;
        };
        for raw_token in normalize(text).split_whitespace() {
            if config.stopwords.contains(raw_token) {
                continue;
            }
            *counts.entry(raw_token.to_string()).or_insert(0) += 1;
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    let mut ranked: TokenFrequency = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(config.top_k);

    Ok(ranked)
}

/// Lowercase and strip every character that is not alphanumeric,
/// underscore, or whitespace.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

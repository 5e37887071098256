//! Frequency rankings over categorical and year columns.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{MetaprepError, Result};
use crate::table::{Table, Value};

/// Count occurrences of each distinct non-null value in a column, ranked
/// by descending count with ties in first-seen order. Used for top-journal
/// and license-distribution reports; callers truncate to taste.
pub fn value_counts(table: &Table, column: &str) -> Result<Vec<(String, usize)>> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| MetaprepError::MissingColumn(column.to_string()))?;

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in table.column_values(idx) {
        if value.is_null() {
            continue;
        }
        *counts.entry(value.to_field()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(ranked)
}

/// Count rows per calendar year, sorted ascending by year. The column may
/// hold either derived year integers or parsed dates.
pub fn year_distribution(table: &Table, column: &str) -> Result<Vec<(i32, usize)>> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| MetaprepError::MissingColumn(column.to_string()))?;

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for value in table.column_values(idx) {
        let year = match value {
            Value::Integer(y) => i32::try_from(*y).ok(),
            Value::Date(d) => Some(chrono::Datelike::year(d)),
            _ => None,
        };
        if let Some(year) = year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }

    Ok(counts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_value_counts_ranked() {
        let table = Table::new(
            vec!["journal".to_string()],
            vec![
                vec![text("Nature")],
                vec![text("Lancet")],
                vec![text("Nature")],
                vec![Value::Null],
            ],
        );
        let ranked = value_counts(&table, "journal").unwrap();

        assert_eq!(ranked, vec![("Nature".to_string(), 2), ("Lancet".to_string(), 1)]);
    }

    #[test]
    fn test_value_counts_tie_first_seen() {
        let table = Table::new(
            vec!["license".to_string()],
            vec![vec![text("cc-by")], vec![text("mit")]],
        );
        let ranked = value_counts(&table, "license").unwrap();

        assert_eq!(ranked[0].0, "cc-by");
        assert_eq!(ranked[1].0, "mit");
    }

    #[test]
    fn test_year_distribution_sorted() {
        let table = Table::new(
            vec!["publish_year".to_string()],
            vec![
                vec![Value::Integer(2021)],
                vec![Value::Integer(2019)],
                vec![Value::Integer(2021)],
                vec![Value::Null],
            ],
        );
        let dist = year_distribution(&table, "publish_year").unwrap();

        assert_eq!(dist, vec![(2019, 1), (2021, 2)]);
    }

    #[test]
    fn test_empty_table_rankings() {
        let table = Table::empty(vec!["journal".to_string()]);
        assert!(value_counts(&table, "journal").unwrap().is_empty());
    }
}

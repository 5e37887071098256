//! Schema inspection: per-column missingness statistics.

use serde::Serialize;

use crate::table::Table;

/// Missingness statistics for one column of a table snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStat {
    /// Column name.
    pub column: String,
    /// Number of rows where the value is absent.
    pub missing_count: usize,
    /// `missing_count / total_rows * 100`; 0.0 for a table with no rows.
    pub missing_pct: f64,
}

/// Compute a [`ColumnStat`] for every column, sorted descending by missing
/// percentage. Equal percentages keep schema order, so the profile is
/// deterministic. Pure; the table is not modified.
pub fn missing_profile(table: &Table) -> Vec<ColumnStat> {
    let total = table.row_count();
    let mut missing = vec![0usize; table.column_count()];

    for row in table.rows() {
        for (idx, value) in row.iter().enumerate() {
            if value.is_null() {
                missing[idx] += 1;
            }
        }
    }

    let mut stats: Vec<ColumnStat> = table
        .columns()
        .iter()
        .zip(missing)
        .map(|(column, missing_count)| ColumnStat {
            column: column.clone(),
            missing_count,
            missing_pct: if total == 0 {
                0.0
            } else {
                missing_count as f64 / total as f64 * 100.0
            },
        })
        .collect();

    // Stable sort: ties stay in schema order.
    stats.sort_by(|a, b| {
        b.missing_pct
            .partial_cmp(&a.missing_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    stats
}

//! Column pruning by missingness threshold.

use std::collections::HashSet;

use crate::table::Table;

use super::inspect::ColumnStat;

/// Remove every column whose missing percentage strictly exceeds
/// `threshold`, keeping the survivors in schema order.
///
/// No column is exempt by name; if a later stage requires a column that was
/// pruned here, that stage reports it as missing. Removing every column is
/// legal: the result keeps the original row count with zero columns.
pub fn prune_columns(table: &Table, profile: &[ColumnStat], threshold: f64) -> Table {
    let dropped: HashSet<&str> = profile
        .iter()
        .filter(|stat| stat.missing_pct > threshold)
        .map(|stat| stat.column.as_str())
        .collect();

    let kept: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| !dropped.contains(name.as_str()))
        .map(|(idx, _)| idx)
        .collect();

    let columns: Vec<String> = kept.iter().map(|&i| table.columns()[i].clone()).collect();
    let rows: Vec<Vec<_>> = table
        .rows()
        .iter()
        .map(|row| kept.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Table::new(columns, rows)
}

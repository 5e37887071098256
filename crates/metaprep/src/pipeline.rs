//! Pipeline orchestration: inspect, prune, impute, derive.

use std::path::Path;

use crate::clean::{
    add_derived_fields, fill_defaults, missing_profile, prune_columns, require_date, ColumnStat,
    DefaultFill, DeriveConfig,
};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::table::Table;

/// Configuration for a cleaning run. All values have defaults matching the
/// conventional paper-metadata export; callers override per field.
///
/// The missingness threshold applies uniformly: no column is exempt from
/// pruning by name, including the fill and date columns. That is policy,
/// not a safety mechanism. If source data ever pushes a required field's
/// missingness above the threshold, the imputer reports the pruned column
/// as missing instead of proceeding silently.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Parser configuration for file input.
    pub parser: ParserConfig,
    /// Columns with missing percentage strictly above this are dropped.
    pub missing_threshold: f64,
    /// Null substitutions applied before date filtering.
    pub default_fills: Vec<DefaultFill>,
    /// Source columns for the required date and the derived fields.
    pub derive: DeriveConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            missing_threshold: 70.0,
            default_fills: vec![
                DefaultFill::new("abstract", ""),
                DefaultFill::new("authors", "Unknown"),
            ],
            derive: DeriveConfig::default(),
        }
    }
}

/// Result of one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Missingness profile of the table before cleaning.
    pub profile: Vec<ColumnStat>,
    /// Columns removed by the pruner, in profile order.
    pub dropped_columns: Vec<String>,
    /// Rows removed by the required-date filter.
    pub rows_dropped: usize,
    /// The cleaned table with derived fields appended.
    pub table: Table,
}

/// The cleaning-and-derivation pipeline.
///
/// Stages run strictly in order (inspect, prune, impute, derive) and each
/// produces a new table; the input table is never mutated. Running
/// [`Pipeline::clean`] on its own output yields an identical table.
pub struct Pipeline {
    config: PipelineConfig,
    parser: Parser,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parse a delimited file and clean the resulting table.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<(CleanResult, SourceMetadata)> {
        let (table, source) = self.parser.parse_file(path)?;
        let result = self.clean(&table)?;
        Ok((result, source))
    }

    /// Run the cleaning stages over a table.
    pub fn clean(&self, table: &Table) -> Result<CleanResult> {
        let profile = missing_profile(table);

        let dropped_columns: Vec<String> = profile
            .iter()
            .filter(|stat| stat.missing_pct > self.config.missing_threshold)
            .map(|stat| stat.column.clone())
            .collect();

        let pruned = prune_columns(table, &profile, self.config.missing_threshold);
        let filled = fill_defaults(&pruned, &self.config.default_fills)?;
        let dated = require_date(&filled, &self.config.derive.date_column)?;
        let rows_dropped = filled.row_count() - dated.row_count();
        let derived = add_derived_fields(&dated, &self.config.derive)?;

        Ok(CleanResult {
            profile,
            dropped_columns,
            rows_dropped,
            table: derived,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

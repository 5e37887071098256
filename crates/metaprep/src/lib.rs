//! metaprep: cleaning and aggregation pipeline for research-paper
//! metadata exports.
//!
//! The library ingests a tabular metadata export (one row per paper) and
//! produces a cleaned, derived table plus summary statistics for
//! downstream reporting.
//!
//! # Core Principles
//!
//! - **Immutable stages**: every stage returns a new table; nothing is
//!   mutated in place
//! - **Policy over errors**: per-row problems (nulls, unparsable dates)
//!   are resolved by configured policy, never surfaced as errors
//! - **Deterministic output**: identical input tables produce identical
//!   cleaned tables, rankings, and summaries
//!
//! # Example
//!
//! ```no_run
//! use metaprep::{Pipeline, SummaryConfig};
//!
//! let pipeline = Pipeline::new();
//! let (result, source) = pipeline.process_file("metadata.csv").unwrap();
//!
//! println!("rows kept: {}", result.table.row_count());
//! println!("source hash: {}", source.hash);
//!
//! let summary = metaprep::report::summarize(
//!     &result.table,
//!     &SummaryConfig::for_keyword("COVID-19"),
//! )
//! .unwrap();
//! println!("keyword matches: {}", summary.keyword_matches);
//! ```

pub mod clean;
pub mod dates;
pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod table;
pub mod text;

mod pipeline;

pub use crate::pipeline::{CleanResult, Pipeline, PipelineConfig};
pub use clean::{ColumnStat, DefaultFill, DeriveConfig};
pub use error::{MetaprepError, Result};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use report::{SummaryConfig, SummaryRecord};
pub use table::{Table, Value};
pub use text::{TokenConfig, TokenFrequency};

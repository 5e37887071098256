//! Reduction of a cleaned table into summary statistics and rankings.

mod rankings;
mod summary;

pub use rankings::{value_counts, year_distribution};
pub use summary::{summarize, SummaryConfig, SummaryRecord};

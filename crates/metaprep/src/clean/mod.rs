//! The cleaning stages: missingness profiling, column pruning, field
//! imputation, and derived-field computation.
//!
//! Stages run in that order and each returns a new [`crate::Table`].

mod derive;
mod impute;
mod inspect;
mod prune;

pub use derive::{
    add_derived_fields, DeriveConfig, ABSTRACT_WORD_COUNT, AUTHOR_COUNT, PUBLISH_YEAR,
};
pub use impute::{fill_defaults, require_date, DefaultFill};
pub use inspect::{missing_profile, ColumnStat};
pub use prune::prune_columns;

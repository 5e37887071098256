//! Text aggregation: keyword filtering and token frequency counting.

mod aggregate;
mod stopwords;

pub use aggregate::{filter_by_keyword, token_frequency, TokenConfig, TokenFrequency};
pub use stopwords::DEFAULT_STOPWORDS;

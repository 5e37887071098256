//! Built-in English stopword set for token frequency counting.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common English words excluded from frequency counts by default.
/// Callers can supply their own set through
/// [`TokenConfig`](super::TokenConfig).
pub static DEFAULT_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be",
        "because", "been", "before", "being", "between", "both", "but", "by", "can", "could",
        "did", "do", "does", "during", "each", "for", "from", "further", "had", "has", "have",
        "her", "here", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
        "may", "more", "most", "no", "not", "of", "on", "only", "or", "other", "our", "over",
        "several", "should", "so", "some", "such", "than", "that", "the", "their", "then",
        "there", "these", "they", "this", "those", "through", "to", "under", "us", "use",
        "used", "using", "was", "we", "were", "what", "when", "where", "which", "while", "who",
        "will", "with", "within", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

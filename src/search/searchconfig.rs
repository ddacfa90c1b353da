use std::time::Duration;

use typed_builder::TypedBuilder;

/// Floor for [`SearchConfig::min_word_len`]; smaller values are raised to it.
pub const MIN_WORD_LEN: usize = 4;

#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest path that is recorded as a word. Shorter prefixes are still explored.
    /// Never below [`MIN_WORD_LEN`].
    #[builder(default = MIN_WORD_LEN)]
    pub min_word_len: usize,
    /// Checked before each starting cell; cells not started in time are skipped.
    #[builder(default, setter(strip_option))]
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::builder().build()
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }
}
